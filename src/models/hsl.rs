//! Model a color with the HSL notation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{alpha_flags, check_channels, Flags, FormatOptions};
use crate::{parse, range::ChannelRange, Component, Error, Result};

tinct_macros::gen_model! {
    /// A color specified with hue in degrees and saturation and lightness in
    /// percent.
    #[derive(Serialize, Deserialize)]
    #[serde(try_from = "HslRecord", into = "HslRecord")]
    pub struct Hsl {
        /// The hue of the color, in `[0, 360]`.
        hue: Component,
        /// The saturation of the color, in `[0, 100]`.
        saturation: Component,
        /// The lightness of the color, in `[0, 100]`.
        lightness: Component,
    }
}

/// The plain record form of an [`Hsl`], as used for JSON interchange.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HslRecord {
    /// Hue channel.
    pub h: Component,
    /// Saturation channel.
    pub s: Component,
    /// Lightness channel.
    pub l: Component,
    /// Alpha channel, `1.0` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Component>,
}

impl Hsl {
    /// Create a new color from its channels. Alpha defaults to `1.0` when
    /// `None` is passed.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: impl Into<Option<Component>>,
    ) -> Result<Self> {
        Self::validated(hue, saturation, lightness, alpha.into(), Flags::empty(), None)
    }

    pub(crate) fn validated(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Option<Component>,
        flags: Flags,
        literal: Option<String>,
    ) -> Result<Self> {
        check_channels(
            [
                (ChannelRange::HUE, hue),
                (ChannelRange::SATURATION, saturation),
                (ChannelRange::LIGHTNESS, lightness),
            ],
            alpha,
            literal.as_deref(),
        )?;

        Ok(Self::from_parts(
            hue,
            saturation,
            lightness,
            alpha.unwrap_or(1.0),
            flags | alpha_flags(alpha),
            literal,
        ))
    }

    /// Parse `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`, comma or space
    /// separated. The hue is a number of degrees, optionally with a `deg`,
    /// `rad`, `grad` or `turn` unit, or the keyword `none`, which is `0`.
    pub fn from_string(value: &str) -> Result<Self> {
        tracing::trace!(value, "parsing hsl color");

        let invalid = || Error::InvalidColorString(value.to_owned());
        let args = parse::function_args(value, &["hsl", "hsla"]).ok_or_else(invalid)?;

        let (hue, flags) = hue(args[0]).ok_or_else(invalid)?;
        let saturation = parse::percentage(args[1]).ok_or_else(invalid)?;
        let lightness = parse::percentage(args[2]).ok_or_else(invalid)?;
        let alpha = args
            .get(3)
            .map(|token| parse::alpha(token).ok_or_else(invalid))
            .transpose()?;

        Self::validated(
            hue,
            saturation,
            lightness,
            alpha,
            flags,
            Some(value.to_owned()),
        )
    }

    /// Reconstruct a color from its record form.
    pub fn from_json(record: HslRecord) -> Result<Self> {
        Self::new(record.h, record.s, record.l, record.a)
    }

    /// The record form of this color. Alpha is always included.
    pub fn to_json(&self) -> HslRecord {
        HslRecord {
            h: self.hue,
            s: self.saturation,
            l: self.lightness,
            a: Some(self.alpha),
        }
    }

    /// Return a new color with the same channels and the given alpha.
    pub fn with_alpha(&self, alpha: Component) -> Result<Self> {
        Self::new(self.hue, self.saturation, self.lightness, alpha)
    }

    /// Returns true if the hue was given as `none`.
    pub fn hue_is_none(&self) -> bool {
        self.flags.contains(Flags::HUE_IS_NONE)
    }

    /// Serialize with the given options. Saturation and lightness are
    /// written without a `%` suffix.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        if options.include_alpha || self.has_explicit_alpha() {
            format!(
                "hsla({}, {}, {}, {})",
                self.hue, self.saturation, self.lightness, self.alpha
            )
        } else {
            format!("hsl({}, {}, {})", self.hue, self.saturation, self.lightness)
        }
    }
}

/// Parse a hue into degrees.
fn hue(token: &str) -> Option<(Component, Flags)> {
    if token.eq_ignore_ascii_case("none") {
        return Some((0.0, Flags::HUE_IS_NONE));
    }

    let token = token.to_ascii_lowercase();
    let degrees = if let Some(v) = token.strip_suffix("deg") {
        parse::number(v)?
    } else if let Some(v) = token.strip_suffix("grad") {
        parse::number(v)? * 0.9
    } else if let Some(v) = token.strip_suffix("rad") {
        parse::number(v)?.to_degrees()
    } else if let Some(v) = token.strip_suffix("turn") {
        parse::number(v)? * 360.0
    } else {
        parse::number(&token)?
    };

    Some((degrees, Flags::empty()))
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::default()))
    }
}

impl FromStr for Hsl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<HslRecord> for Hsl {
    type Error = Error;

    fn try_from(value: HslRecord) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<Hsl> for HslRecord {
    fn from(value: Hsl) -> Self {
        value.to_json()
    }
}
