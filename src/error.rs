//! Error types for tinct.

use thiserror::Error;

use crate::Component;

/// Result type for tinct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing, parsing or formatting colors.
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A string could not be parsed as a color in the expected notation.
    #[error("Invalid color string: {0:?}")]
    InvalidColorString(String),

    /// A dynamic value is neither a color string nor a color record.
    #[error("Invalid color value: {0}")]
    InvalidColorValue(String),

    /// A channel is outside of its valid range, or is NaN.
    #[error("Invalid {channel} value {value}, expected a value in [{min}, {max}]")]
    InvalidColorRange {
        /// Name of the channel.
        channel: &'static str,
        /// The rejected value.
        value: Component,
        /// Smallest valid value.
        min: Component,
        /// Largest valid value.
        max: Component,
    },

    /// An output format name is not recognized.
    #[error("Unsupported color format: {0:?}")]
    UnsupportedFormat(String),
}
