//! Conversions between the RGB and HSL notations and between channels and
//! hex digits.
//!
//! Results are rounded to whole numbers at every step, so a round trip from
//! RGB through HSL and back is not exact:
//!
//! ```rust
//! use tinct::convert::{hsl_to_rgb, rgb_to_hsl};
//! let [h, s, l] = rgb_to_hsl(43.0, 128.0, 255.0, None);
//! assert_eq!([h, s, l], [216.0, 100.0, 58.0]);
//! assert_eq!(hsl_to_rgb(h, s, l, None), [41.0, 126.0, 255.0]);
//! ```
//!
//! NOTE: The optional alpha argument is accepted to mirror the tuple form
//!       of the models. It is ignored, alpha is carried by the caller.

use crate::{math::round_half_up, Component, Error, Result};

/// Convert from HSL notation to RGB notation.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub fn hsl_to_rgb(
    hue: Component,
    saturation: Component,
    lightness: Component,
    _alpha: Option<Component>,
) -> [Component; 3] {
    let saturation = saturation / 100.0;
    let lightness = lightness / 100.0;

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            let v = lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            round_half_up(v * 255.0)
        }};
    }

    [f!(0.0), f!(8.0), f!(4.0)]
}

/// Convert from RGB notation to HSL notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
pub fn rgb_to_hsl(
    red: Component,
    green: Component,
    blue: Component,
    _alpha: Option<Component>,
) -> [Component; 3] {
    let red = red / 255.0;
    let green = green / 255.0;
    let blue = blue / 255.0;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        ((hue * 60.0).rem_euclid(360.0), saturation)
    };

    [
        round_half_up(hue),
        round_half_up(saturation * 100.0),
        round_half_up(lightness * 100.0),
    ]
}

/// Two lowercase hex digits for a channel in `[0, 255]`. Values are clamped
/// and rounded to a whole byte first.
pub fn channel_to_hex(value: Component) -> String {
    let byte = round_half_up(value.clamp(0.0, 255.0)) as u8;
    format!("{byte:02x}")
}

/// The channel value of one or two hex digits.
pub fn hex_to_channel(digits: &str) -> Result<Component> {
    u8::from_str_radix(digits, 16)
        .map(Component::from)
        .map_err(|_| Error::InvalidColorString(digits.to_owned()))
}
