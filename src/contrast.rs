//! Pick a light or a dark value depending on how bright a color is, e.g.
//! the text color to put on top of a background.

use crate::{Color, Component};

/// Luminance at and above which a color counts as light.
pub const DEFAULT_THRESHOLD: Component = 127.0;

/// Returns `light` if the luminance of `color` is at least `threshold`,
/// otherwise `dark`. The threshold is clamped to `[0, 255]`.
/// ```rust
/// use tinct::{contrasting_value, Color};
/// let background = Color::from_string("#ffeb3b").unwrap();
/// assert_eq!(contrasting_value(&background, "light", "dark", 127.0), "light");
/// ```
pub fn contrasting_value<T>(color: &Color, light: T, dark: T, threshold: Component) -> T {
    if color.luminance() >= threshold.clamp(0.0, 255.0) {
        light
    } else {
        dark
    }
}

/// The values and threshold for [`prepare_contrasting_value`].
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastOptions<T> {
    /// Returned for light colors.
    pub light: T,
    /// Returned for dark colors.
    pub dark: T,
    /// Luminance at and above which a color counts as light.
    pub threshold: Component,
}

impl<T> ContrastOptions<T> {
    /// Options with the default threshold.
    pub fn new(light: T, dark: T) -> Self {
        Self {
            light,
            dark,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl<T: Default> Default for ContrastOptions<T> {
    fn default() -> Self {
        Self::new(T::default(), T::default())
    }
}

/// Returns a function that applies [`contrasting_value`] with the given
/// options to any number of colors.
pub fn prepare_contrasting_value<T: Clone>(options: ContrastOptions<T>) -> impl Fn(&Color) -> T {
    move |color| {
        contrasting_value(
            color,
            options.light.clone(),
            options.dark.clone(),
            options.threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn threshold_is_inclusive() {
        let color = Color::new(Rgb::new(50.0, 100.0, 200.0, None).unwrap());
        assert_eq!(color.luminance(), 96.5);
        assert_eq!(contrasting_value(&color, "light", "dark", 96.5), "light");
        assert_eq!(contrasting_value(&color, "light", "dark", 97.5), "dark");
    }

    #[test]
    fn threshold_is_clamped() {
        let white = Color::from_string("#fff").unwrap();
        let black = Color::from_string("#000").unwrap();
        assert_eq!(contrasting_value(&black, "light", "dark", -10.0), "light");
        assert_eq!(contrasting_value(&white, "light", "dark", 1000.0), "dark");
        assert_eq!(contrasting_value(&black, "light", "dark", 0.0), "light");
    }

    #[test]
    fn default_threshold() {
        let options = ContrastOptions::new('L', 'D');
        assert_eq!(options.threshold, 127.0);
        assert_eq!(ContrastOptions::<u8>::default().threshold, 127.0);

        let pick = prepare_contrasting_value(options);
        assert_eq!(pick(&Color::from_string("#fff").unwrap()), 'L');
        assert_eq!(pick(&Color::from_string("#000").unwrap()), 'D');
        assert_eq!(pick(&Color::from_string("rgb(255, 0, 0)").unwrap()), 'D');
    }

    #[test]
    fn prepared_with_custom_threshold() {
        let pick = prepare_contrasting_value(ContrastOptions {
            light: String::from("#000"),
            dark: String::from("#fff"),
            threshold: 50.0,
        });
        assert_eq!(pick(&Color::from_string("rgb(255, 0, 0)").unwrap()), "#000");
        assert_eq!(pick(&Color::from_string("hsl(240, 100%, 50%)").unwrap()), "#fff");
    }
}
