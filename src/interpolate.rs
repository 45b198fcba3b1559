use crate::{math::lerp, Color, ColorFormat, Component, Hex, Hsl, Result, Rgb};

/// Interpolate between two hues along the shorter arc.
fn lerp_hue(a: Component, b: Component, t: Component) -> Component {
    let mut delta = b - a;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    (a + delta * t).rem_euclid(360.0)
}

impl Color {
    /// Linearly interpolate from this color to another, with `t` clamped to
    /// `[0, 1]` as the progress between them. `Rgb` and `Hex` interpolate
    /// the RGB channels, `Hsl` interpolates in HSL with hue taking the
    /// shorter way around. Alpha is always interpolated.
    pub fn mix(&self, other: &Color, t: Component, space: ColorFormat) -> Result<Color> {
        let t = t.clamp(0.0, 1.0);

        let alpha = if self.has_explicit_alpha() || other.has_explicit_alpha() {
            Some(lerp(self.alpha(), other.alpha(), t))
        } else {
            None
        };

        let mixed = match space {
            ColorFormat::Rgb | ColorFormat::Hex => {
                let [r0, g0, b0] = self.to_rgb().components();
                let [r1, g1, b1] = other.to_rgb().components();
                let rgb = Rgb::new(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t), alpha)?;
                if space == ColorFormat::Hex {
                    Color::new(Hex::from_rgb(&rgb))
                } else {
                    Color::new(rgb)
                }
            }
            ColorFormat::Hsl => {
                let left = self.to_hsl();
                let right = other.to_hsl();
                Color::new(Hsl::new(
                    lerp_hue(left.hue(), right.hue(), t),
                    lerp(left.saturation(), right.saturation(), t),
                    lerp(left.lightness(), right.lightness(), t),
                    alpha,
                )?)
            }
        };

        Ok(mixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        Color::from_string(s).unwrap()
    }

    #[test]
    fn rgb_midpoint() {
        let mixed = color("rgb(255, 0, 0)")
            .mix(&color("rgb(0, 0, 255)"), 0.5, ColorFormat::Rgb)
            .unwrap();
        assert_eq!(mixed.to_rgb().value_of(), [127.5, 0.0, 127.5, 1.0]);
        assert!(!mixed.to_rgb().has_explicit_alpha());
    }

    #[test]
    fn hex_rounds_channels() {
        let mixed = color("#ff0000")
            .mix(&color("#0000ff"), 0.5, ColorFormat::Hex)
            .unwrap();
        assert_eq!(mixed.to_string(), "#800080");
    }

    #[test]
    fn hsl_takes_shorter_hue_arc() {
        let mixed = color("hsl(0, 100%, 50%)")
            .mix(&color("hsl(240, 100%, 50%)"), 0.5, ColorFormat::Hsl)
            .unwrap();
        assert_eq!(mixed.to_hsl().value_of(), [300.0, 100.0, 50.0, 1.0]);

        assert_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0);
        assert_eq!(lerp_hue(10.0, 50.0, 0.25), 20.0);
    }

    #[test]
    fn alpha_and_clamping() {
        let left = color("rgba(0, 0, 0, 0)");
        let right = color("rgb(100, 100, 100)");
        let mixed = left.mix(&right, 0.25, ColorFormat::Rgb).unwrap();
        assert_eq!(mixed.to_rgb().value_of(), [25.0, 25.0, 25.0, 0.25]);

        let mixed = left.mix(&right, 4.0, ColorFormat::Rgb).unwrap();
        assert_eq!(mixed.to_rgb().value_of(), [100.0, 100.0, 100.0, 1.0]);
    }
}
