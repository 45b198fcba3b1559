//! Model a color with red, green and blue channels, the common interchange
//! form all other notations convert through.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{alpha_flags, check_channels, Flags, FormatOptions};
use crate::{parse, range::ChannelRange, Component, Error, Result};

tinct_macros::gen_model! {
    /// A color specified with red, green and blue channels in `[0, 255]`.
    #[derive(Serialize, Deserialize)]
    #[serde(try_from = "RgbRecord", into = "RgbRecord")]
    pub struct Rgb {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

/// The plain record form of an [`Rgb`], as used for JSON interchange.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbRecord {
    /// Red channel.
    pub r: Component,
    /// Green channel.
    pub g: Component,
    /// Blue channel.
    pub b: Component,
    /// Alpha channel, `1.0` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Component>,
}

impl Rgb {
    /// Create a new color from its channels. Alpha defaults to `1.0` when
    /// `None` is passed.
    /// ```rust
    /// use tinct::Rgb;
    /// let opaque = Rgb::new(43.0, 128.0, 255.0, None).unwrap();
    /// let half = Rgb::new(43.0, 128.0, 255.0, 0.5).unwrap();
    /// assert_eq!(opaque.alpha(), 1.0);
    /// assert_eq!(half.alpha(), 0.5);
    /// ```
    pub fn new(
        red: Component,
        green: Component,
        blue: Component,
        alpha: impl Into<Option<Component>>,
    ) -> Result<Self> {
        Self::validated(red, green, blue, alpha.into(), Flags::empty(), None)
    }

    pub(crate) fn validated(
        red: Component,
        green: Component,
        blue: Component,
        alpha: Option<Component>,
        flags: Flags,
        literal: Option<String>,
    ) -> Result<Self> {
        check_channels(
            [
                (ChannelRange::RED, red),
                (ChannelRange::GREEN, green),
                (ChannelRange::BLUE, blue),
            ],
            alpha,
            literal.as_deref(),
        )?;

        Ok(Self::from_parts(
            red,
            green,
            blue,
            alpha.unwrap_or(1.0),
            flags | alpha_flags(alpha),
            literal,
        ))
    }

    /// Parse `rgb(r, g, b)`, `rgba(r, g, b, a)` or the space separated
    /// `rgb(r g b / a)`. Alpha may be a decimal or a percentage.
    pub fn from_string(value: &str) -> Result<Self> {
        tracing::trace!(value, "parsing rgb color");

        let invalid = || Error::InvalidColorString(value.to_owned());
        let args = parse::function_args(value, &["rgb", "rgba"]).ok_or_else(invalid)?;

        let red = parse::number(args[0]).ok_or_else(invalid)?;
        let green = parse::number(args[1]).ok_or_else(invalid)?;
        let blue = parse::number(args[2]).ok_or_else(invalid)?;
        let alpha = args
            .get(3)
            .map(|token| parse::alpha(token).ok_or_else(invalid))
            .transpose()?;

        Self::validated(
            red,
            green,
            blue,
            alpha,
            Flags::empty(),
            Some(value.to_owned()),
        )
    }

    /// Reconstruct a color from its record form.
    pub fn from_json(record: RgbRecord) -> Result<Self> {
        Self::new(record.r, record.g, record.b, record.a)
    }

    /// The record form of this color. Alpha is always included.
    pub fn to_json(&self) -> RgbRecord {
        RgbRecord {
            r: self.red,
            g: self.green,
            b: self.blue,
            a: Some(self.alpha),
        }
    }

    /// Return a new color with the same channels and the given alpha.
    pub fn with_alpha(&self, alpha: Component) -> Result<Self> {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Serialize with the given options. `rgba(...)` is written when alpha
    /// was explicit or `include_alpha` is set.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        if options.include_alpha || self.has_explicit_alpha() {
            format!(
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        } else {
            format!("rgb({}, {}, {})", self.red, self.green, self.blue)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::default()))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<RgbRecord> for Rgb {
    type Error = Error;

    fn try_from(value: RgbRecord) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<Rgb> for RgbRecord {
    fn from(value: Rgb) -> Self {
        value.to_json()
    }
}
