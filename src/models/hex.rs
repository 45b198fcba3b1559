//! Model a color written in hexadecimal notation. The numeric channels are
//! held by an owned [`Rgb`].

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ColorValue, Flags, Rgb, RgbRecord};
use crate::{
    convert::{channel_to_hex, hex_to_channel},
    math::round_half_up,
    Component, Error, Result,
};

static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$")
        .expect("Should compile: HEX_PATTERN")
});

/// The layouts a hex color can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexFormat {
    /// `#rgb`
    Short,
    /// `#rgba`
    ShortAlpha,
    /// `#rrggbb`
    Long,
    /// `#rrggbbaa`
    LongAlpha,
}

impl HexFormat {
    fn has_alpha(self) -> bool {
        matches!(self, Self::ShortAlpha | Self::LongAlpha)
    }

    fn is_short(self) -> bool {
        matches!(self, Self::Short | Self::ShortAlpha)
    }
}

impl FromStr for HexFormat {
    type Err = Error;

    /// Accepts the pattern names `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "#rgb" => Ok(Self::Short),
            "#rgba" => Ok(Self::ShortAlpha),
            "#rrggbb" => Ok(Self::Long),
            "#rrggbbaa" => Ok(Self::LongAlpha),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

/// A color parsed from, or written as, `#rgb`, `#rgba`, `#rrggbb` or
/// `#rrggbbaa`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex {
    literal: String,
    rgb: Rgb,
}

impl Hex {
    /// Parse a hex color. The digits are case-insensitive and shorthand
    /// digits are doubled, so `#abc` is `#aabbcc`.
    pub fn new(literal: &str) -> Result<Self> {
        tracing::trace!(literal, "parsing hex color");

        if !HEX_PATTERN.is_match(literal) {
            return Err(Error::InvalidColorString(literal.to_owned()));
        }

        let digits = &literal[1..];
        let expanded: String = if digits.len() <= 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_owned()
        };

        let red = hex_to_channel(&expanded[0..2])?;
        let green = hex_to_channel(&expanded[2..4])?;
        let blue = hex_to_channel(&expanded[4..6])?;
        let alpha = expanded
            .get(6..8)
            .map(|pair| hex_to_channel(pair).map(|a| a / 255.0))
            .transpose()?;

        let rgb = Rgb::validated(red, green, blue, alpha, Flags::empty(), None)?;

        Ok(Self {
            literal: literal.to_owned(),
            rgb,
        })
    }

    /// Build the hex form of an RGB color. Channels are rounded to whole
    /// bytes. The alpha byte is only written when alpha was explicit or is
    /// below `1`.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let byte = |value: Component| round_half_up(value.clamp(0.0, 255.0));

        let with_alpha = rgb.has_explicit_alpha() || rgb.alpha() < 1.0;
        let (alpha, flags) = if with_alpha {
            (byte(rgb.alpha() * 255.0) / 255.0, Flags::ALPHA_IS_EXPLICIT)
        } else {
            (1.0, Flags::empty())
        };

        let rgb = Rgb::from_parts(
            byte(rgb.red()),
            byte(rgb.green()),
            byte(rgb.blue()),
            alpha,
            flags,
            None,
        );
        let format = if with_alpha {
            HexFormat::LongAlpha
        } else {
            HexFormat::Long
        };
        let literal = format_hex(&rgb, format);

        Self { literal, rgb }
    }

    /// The string this color was created from.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The RGB form of this color.
    pub fn rgb(&self) -> &Rgb {
        &self.rgb
    }

    /// The red channel of the color.
    pub fn red(&self) -> Component {
        self.rgb.red()
    }

    /// The green channel of the color.
    pub fn green(&self) -> Component {
        self.rgb.green()
    }

    /// The blue channel of the color.
    pub fn blue(&self) -> Component {
        self.rgb.blue()
    }

    /// The alpha channel of the color.
    pub fn alpha(&self) -> Component {
        self.rgb.alpha()
    }

    /// Returns true if the literal had alpha digits.
    pub fn has_explicit_alpha(&self) -> bool {
        self.rgb.has_explicit_alpha()
    }

    /// The channels followed by alpha.
    pub fn value_of(&self) -> [Component; 4] {
        self.rgb.value_of()
    }

    /// The record form of this color.
    pub fn to_json(&self) -> RgbRecord {
        self.rgb.to_json()
    }

    /// Write the color in the given layout. A short layout is only used
    /// when every channel can be written with a single digit, otherwise
    /// the matching long layout is used.
    pub fn to_string_as(&self, format: HexFormat) -> String {
        format_hex(&self.rgb, format)
    }
}

fn format_hex(rgb: &Rgb, format: HexFormat) -> String {
    let mut pairs = vec![
        channel_to_hex(rgb.red()),
        channel_to_hex(rgb.green()),
        channel_to_hex(rgb.blue()),
    ];
    if format.has_alpha() {
        pairs.push(channel_to_hex(rgb.alpha() * 255.0));
    }

    let collapsible = pairs.iter().all(|pair| {
        let bytes = pair.as_bytes();
        bytes[0] == bytes[1]
    });

    let mut out = String::from("#");
    if format.is_short() && collapsible {
        pairs.iter().for_each(|pair| out.push_str(&pair[..1]));
    } else {
        pairs.iter().for_each(|pair| out.push_str(pair));
    }
    out
}

impl PartialEq for Hex {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl ColorValue for Hex {
    fn alpha(&self) -> Component {
        self.rgb.alpha()
    }

    fn has_explicit_alpha(&self) -> bool {
        self.rgb.has_explicit_alpha()
    }

    fn value_of(&self) -> [Component; 4] {
        self.rgb.value_of()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal.to_ascii_lowercase())
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Hex> for String {
    fn from(value: Hex) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_shorthand() {
        assert_eq!(Hex::new("#abc").unwrap().value_of(), [170.0, 187.0, 204.0, 1.0]);
        assert_eq!(
            Hex::new("#abcd").unwrap().value_of(),
            [170.0, 187.0, 204.0, 0.8666666666666667]
        );
        assert_eq!(
            Hex::new("#AABBCC80").unwrap().value_of(),
            [170.0, 187.0, 204.0, 128.0 / 255.0]
        );
    }

    #[test]
    fn alpha_digits_are_explicit() {
        assert!(!Hex::new("#aabbcc").unwrap().has_explicit_alpha());
        assert!(Hex::new("#aabbccff").unwrap().has_explicit_alpha());
        assert_eq!(Hex::new("#aabbccff").unwrap().alpha(), 1.0);
    }

    #[test]
    fn rejects_invalid_literals() {
        for s in ["abc", "#ab", "#abcde", "#abcdefg", "#ggg", "#12345678a", ""] {
            assert_eq!(
                Hex::new(s),
                Err(Error::InvalidColorString(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn display_keeps_literal() {
        assert_eq!(Hex::new("#ABC").unwrap().to_string(), "#abc");
        assert_eq!(Hex::new("#AaBbCcDd").unwrap().to_string(), "#aabbccdd");
    }

    #[test]
    fn collapses_to_short_form() {
        let hex = Hex::new("#aabbcc").unwrap();
        assert_eq!(hex.to_string_as(HexFormat::Short), "#abc");
        assert_eq!(hex.to_string_as(HexFormat::ShortAlpha), "#abcf");
        assert_eq!(hex.to_string_as(HexFormat::Long), "#aabbcc");
        assert_eq!(hex.to_string_as(HexFormat::LongAlpha), "#aabbccff");

        let hex = Hex::new("#abc").unwrap();
        assert_eq!(hex.to_string_as(HexFormat::Long), "#aabbcc");
    }

    #[test]
    fn falls_back_to_long_form() {
        let hex = Hex::new("#aabbcd").unwrap();
        assert_eq!(hex.to_string_as(HexFormat::Short), "#aabbcd");

        let hex = Hex::new("#aabbcc80").unwrap();
        assert_eq!(hex.to_string_as(HexFormat::ShortAlpha), "#aabbcc80");
        assert_eq!(hex.to_string_as(HexFormat::Short), "#abc");
    }

    #[test]
    fn format_names() {
        assert_eq!("#rgb".parse::<HexFormat>(), Ok(HexFormat::Short));
        assert_eq!("#RRGGBBAA".parse::<HexFormat>(), Ok(HexFormat::LongAlpha));
        assert_eq!(
            "#rrgb".parse::<HexFormat>(),
            Err(Error::UnsupportedFormat("#rrgb".to_string()))
        );
    }

    #[test]
    fn from_rgb_rounds_channels() {
        let rgb = Rgb::new(170.4, 187.5, 204.0, None).unwrap();
        let hex = Hex::from_rgb(&rgb);
        assert_eq!(hex.literal(), "#aabccc");
        assert_eq!(hex.value_of(), [170.0, 188.0, 204.0, 1.0]);

        let rgb = Rgb::new(0.0, 0.0, 0.0, 0.5).unwrap();
        assert_eq!(Hex::from_rgb(&rgb).literal(), "#00000080");
    }

    #[test]
    fn delegates_to_rgb() {
        let hex = Hex::new("#102030").unwrap();
        assert_eq!(hex.red(), 16.0);
        assert_eq!(hex.green(), 32.0);
        assert_eq!(hex.blue(), 48.0);
        assert_eq!(hex.rgb().to_string(), "rgb(16, 32, 48)");
        assert_eq!(hex.to_json(), hex.rgb().to_json());
    }

    #[test]
    fn serde_uses_the_literal() {
        let hex: Hex = serde_json::from_str(r##""#ABC""##).unwrap();
        assert_eq!(serde_json::to_string(&hex).unwrap(), r##""#abc""##);
        assert!(serde_json::from_str::<Hex>(r##""#zzz""##).is_err());
    }
}
