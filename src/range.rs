//! Bounds shared by all color channels and the check that enforces them.

use num_traits::Float;

use crate::{Component, Error, Result};

/// The inclusive range a named channel must fall in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    /// Name reported in errors.
    pub name: &'static str,
    /// Smallest valid value.
    pub min: Component,
    /// Largest valid value.
    pub max: Component,
}

impl ChannelRange {
    /// Red channel of an RGB color.
    pub const RED: Self = Self::new("red", 0.0, 255.0);
    /// Green channel of an RGB color.
    pub const GREEN: Self = Self::new("green", 0.0, 255.0);
    /// Blue channel of an RGB color.
    pub const BLUE: Self = Self::new("blue", 0.0, 255.0);
    /// Alpha channel of any color.
    pub const ALPHA: Self = Self::new("alpha", 0.0, 1.0);
    /// Hue of an HSL color, in degrees.
    pub const HUE: Self = Self::new("hue", 0.0, 360.0);
    /// Saturation of an HSL color, in percent.
    pub const SATURATION: Self = Self::new("saturation", 0.0, 100.0);
    /// Lightness of an HSL color, in percent.
    pub const LIGHTNESS: Self = Self::new("lightness", 0.0, 100.0);

    const fn new(name: &'static str, min: Component, max: Component) -> Self {
        Self { name, min, max }
    }

    /// Returns the value if it is in range, otherwise an
    /// [`Error::InvalidColorRange`] describing the channel.
    pub fn check(&self, value: Component) -> Result<Component> {
        if is_in_range(value, self.min, self.max) {
            Ok(value)
        } else {
            Err(Error::InvalidColorRange {
                channel: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Returns true if `value` is in `[min, max]`. NaN is never in range.
pub fn is_in_range<T: Float>(value: T, min: T, max: T) -> bool {
    !value.is_nan() && value >= min && value <= max
}
