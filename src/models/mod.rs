//! Models are immutable value types that represent a color in one of the
//! supported notations. Every model carries an alpha channel and can be
//! viewed as a `[c0, c1, c2, alpha]` tuple.

use std::fmt::Display;

use bitflags::bitflags;

use crate::{range::ChannelRange, Component, Error, Result};

mod hex;
mod hsl;
mod rgb;

pub use hex::{Hex, HexFormat};
pub use hsl::{Hsl, HslRecord};
pub use rgb::{Rgb, RgbRecord};

bitflags! {
    /// Details about how a model was specified.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the alpha channel was given, rather than defaulted.
        const ALPHA_IS_EXPLICIT = 1 << 0;
        /// Set when the hue was specified with the `none` keyword.
        const HUE_IS_NONE = 1 << 1;
    }
}

/// Implemented by every color model.
pub trait ColorValue: Display {
    /// The alpha channel in `[0, 1]`.
    fn alpha(&self) -> Component;

    /// Returns true if the alpha channel was given explicitly.
    fn has_explicit_alpha(&self) -> bool;

    /// The color channels followed by alpha.
    fn value_of(&self) -> [Component; 4];
}

/// Options applied when serializing a color to a string.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FormatOptions {
    /// Always write the alpha channel for `rgb`/`hsl` output.
    pub include_alpha: bool,
    /// The layout of hex output. `None` keeps the literal of a parsed hex.
    pub hex: Option<HexFormat>,
}

impl FormatOptions {
    /// Options that force the alpha channel to be written.
    pub fn with_alpha() -> Self {
        Self {
            include_alpha: true,
            ..Self::default()
        }
    }

    /// Options that write hex output in the given layout.
    pub fn hex(format: HexFormat) -> Self {
        Self {
            hex: Some(format),
            ..Self::default()
        }
    }
}

/// Flags for a model with the given optional alpha.
pub(crate) fn alpha_flags(alpha: Option<Component>) -> Flags {
    if alpha.is_some() {
        Flags::ALPHA_IS_EXPLICIT
    } else {
        Flags::empty()
    }
}

/// Check the three color channels and alpha against their ranges.
///
/// When the color was parsed from `literal`, a range failure is reported as
/// [`Error::InvalidColorString`] for that literal and the channel detail is
/// only logged.
pub(crate) fn check_channels(
    channels: [(ChannelRange, Component); 3],
    alpha: Option<Component>,
    literal: Option<&str>,
) -> Result<()> {
    let checked = channels
        .iter()
        .try_for_each(|(range, value)| range.check(*value).map(drop))
        .and_then(|_| {
            alpha
                .map(|a| ChannelRange::ALPHA.check(a))
                .transpose()
                .map(drop)
        });

    match (checked, literal) {
        (Ok(()), _) => Ok(()),
        (Err(err), None) => Err(err),
        (Err(err), Some(literal)) => {
            tracing::debug!(%err, literal, "color string has a channel out of range");
            Err(Error::InvalidColorString(literal.to_owned()))
        }
    }
}
