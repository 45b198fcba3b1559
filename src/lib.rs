//! tinct models colors written in the CSS `rgb()`, `hsl()` and hex
//! notations as immutable values, converts between them and derives
//! luminance and light/dark contrast decisions from them.
//!
//! ```rust
//! use tinct::{Color, ColorFormat};
//! let color = Color::from_string("hsl(216deg, 100%, 58%)").unwrap();
//! assert_eq!(color.to_format(ColorFormat::Rgb), "rgb(41, 126, 255)");
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
pub mod convert;
mod error;
mod interpolate;
mod math;
mod models;
mod parse;
pub mod range;

#[cfg(test)]
mod test;

/// Every channel of every model is stored as a 64-bit float.
pub type Component = f64;

pub use color::{Color, ColorFormat, ColorSource};
pub use contrast::{
    contrasting_value, prepare_contrasting_value, ContrastOptions, DEFAULT_THRESHOLD,
};
pub use error::{Error, Result};
pub use models::{
    ColorValue, Flags, FormatOptions, Hex, HexFormat, Hsl, HslRecord, Rgb, RgbRecord,
};
