//! A [`Color`] wraps a color specified in any of the supported notations and
//! converts it to the others on demand.

use std::{fmt, str::FromStr};

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::{
    convert::{hsl_to_rgb, rgb_to_hsl},
    math::{weighted_sum, LUMINANCE_WEIGHTS},
    models::{ColorValue, Flags, FormatOptions, Hex, HslRecord, RgbRecord},
    Component, Error, Hsl, Result, Rgb,
};

/// The notation a [`Color`] was specified in.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSource {
    /// `rgb(...)` or a typed [`Rgb`].
    Rgb(Rgb),
    /// `#...` or a typed [`Hex`].
    Hex(Hex),
    /// `hsl(...)` or a typed [`Hsl`].
    Hsl(Hsl),
}

impl ColorSource {
    /// The wrapped model.
    pub fn as_value(&self) -> &dyn ColorValue {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hex(hex) => hex,
            Self::Hsl(hsl) => hsl,
        }
    }

    /// The notation of the wrapped model.
    pub fn format(&self) -> ColorFormat {
        match self {
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Hex(_) => ColorFormat::Hex,
            Self::Hsl(_) => ColorFormat::Hsl,
        }
    }
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_value(), f)
    }
}

impl From<Rgb> for ColorSource {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hex> for ColorSource {
    fn from(value: Hex) -> Self {
        Self::Hex(value)
    }
}

impl From<Hsl> for ColorSource {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

/// Output notations a [`Color`] can be converted and serialized to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// `rgb(r, g, b)`
    Rgb,
    /// `#rrggbb` and its variants.
    Hex,
    /// `hsl(h, s, l)`
    Hsl,
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Ok(Self::Rgb),
            "hex" => Ok(Self::Hex),
            "hsl" | "hsla" => Ok(Self::Hsl),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

/// A color in any supported notation.
///
/// Conversions to other notations are computed once and cached. Converting
/// to the notation the color was specified in returns the wrapped model
/// itself.
/// ```rust
/// use tinct::Color;
/// let color: Color = "rgb(43, 128, 255)".parse().unwrap();
/// assert_eq!(color.to_hsl().to_string(), "hsl(216, 100, 58)");
/// assert_eq!(color.to_hex().to_string(), "#2b80ff");
/// assert_eq!(color.to_string(), "rgb(43, 128, 255)");
/// ```
#[derive(Clone, Debug)]
pub struct Color {
    source: ColorSource,
    original: Option<String>,
    rgb: OnceCell<Rgb>,
    hex: OnceCell<Hex>,
    hsl: OnceCell<Hsl>,
    luminance: OnceCell<Component>,
}

impl Color {
    /// Wrap an existing model. The model is moved in, not copied.
    pub fn new(source: impl Into<ColorSource>) -> Self {
        Self {
            source: source.into(),
            original: None,
            rgb: OnceCell::new(),
            hex: OnceCell::new(),
            hsl: OnceCell::new(),
            luminance: OnceCell::new(),
        }
    }

    /// Parse a color, picking the notation from the first character: `#`
    /// for hex, `r` for `rgb(...)` and `h` for `hsl(...)`.
    pub fn from_string(value: &str) -> Result<Self> {
        let source: ColorSource = match value.chars().next() {
            Some('#') => Hex::new(value)?.into(),
            Some('r' | 'R') => Rgb::from_string(value)?.into(),
            Some('h' | 'H') => Hsl::from_string(value)?.into(),
            _ => return Err(Error::InvalidColorString(value.to_owned())),
        };

        Ok(Self {
            original: Some(value.to_owned()),
            ..Self::new(source)
        })
    }

    /// Build a color from a dynamic value: a color string, an `{r, g, b}`
    /// record or an `{h, s, l}` record, each with an optional `a`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let invalid = || Error::InvalidColorValue(value.to_string());

        match value {
            Value::String(s) => Self::from_string(s),
            Value::Object(map) if map.contains_key("r") => {
                let record: RgbRecord =
                    serde_json::from_value(value.clone()).map_err(|_| invalid())?;
                Ok(Self::new(Rgb::from_json(record)?))
            }
            Value::Object(map) if map.contains_key("h") => {
                let record: HslRecord =
                    serde_json::from_value(value.clone()).map_err(|_| invalid())?;
                Ok(Self::new(Hsl::from_json(record)?))
            }
            _ => Err(invalid()),
        }
    }

    /// The wrapped model.
    pub fn source(&self) -> &ColorSource {
        &self.source
    }

    /// The string this color was parsed from, if any.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// The alpha channel of the wrapped model.
    pub fn alpha(&self) -> Component {
        self.source.as_value().alpha()
    }

    /// Returns true if the wrapped model was given an explicit alpha.
    pub fn has_explicit_alpha(&self) -> bool {
        self.source.as_value().has_explicit_alpha()
    }

    /// This color in RGB notation.
    pub fn to_rgb(&self) -> &Rgb {
        match &self.source {
            ColorSource::Rgb(rgb) => rgb,
            ColorSource::Hex(hex) => hex.rgb(),
            ColorSource::Hsl(hsl) => self.rgb.get_or_init(|| {
                let [red, green, blue] =
                    hsl_to_rgb(hsl.hue(), hsl.saturation(), hsl.lightness(), None);
                Rgb::from_parts(
                    red,
                    green,
                    blue,
                    hsl.alpha(),
                    hsl.flags() & Flags::ALPHA_IS_EXPLICIT,
                    None,
                )
            }),
        }
    }

    /// This color in hex notation.
    pub fn to_hex(&self) -> &Hex {
        match &self.source {
            ColorSource::Hex(hex) => hex,
            _ => self.hex.get_or_init(|| Hex::from_rgb(self.to_rgb())),
        }
    }

    /// This color in HSL notation.
    pub fn to_hsl(&self) -> &Hsl {
        match &self.source {
            ColorSource::Hsl(hsl) => hsl,
            _ => self.hsl.get_or_init(|| {
                let rgb = self.to_rgb();
                let [hue, saturation, lightness] =
                    rgb_to_hsl(rgb.red(), rgb.green(), rgb.blue(), None);
                Hsl::from_parts(
                    hue,
                    saturation,
                    lightness,
                    rgb.alpha(),
                    rgb.flags() & Flags::ALPHA_IS_EXPLICIT,
                    None,
                )
            }),
        }
    }

    /// Weighted brightness, `0.21 * r + 0.72 * g + 0.07 * b`, in `[0, 255]`.
    pub fn luminance(&self) -> Component {
        *self
            .luminance
            .get_or_init(|| weighted_sum(self.to_rgb().components(), LUMINANCE_WEIGHTS))
    }

    /// Convert to `format` and serialize with default options.
    pub fn to_format(&self, format: ColorFormat) -> String {
        self.to_format_with(format, &FormatOptions::default())
    }

    /// Convert to `format` and serialize with the given options.
    pub fn to_format_with(&self, format: ColorFormat, options: &FormatOptions) -> String {
        match format {
            ColorFormat::Rgb => self.to_rgb().to_string_with(options),
            ColorFormat::Hsl => self.to_hsl().to_string_with(options),
            ColorFormat::Hex => match options.hex {
                Some(hex_format) => self.to_hex().to_string_as(hex_format),
                None => self.to_hex().to_string(),
            },
        }
    }
}

impl fmt::Display for Color {
    /// The string the color was parsed from, otherwise the serialized form
    /// of the wrapped model.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.original {
            Some(original) => f.write_str(original),
            None => fmt::Display::fmt(&self.source, f),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_string(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::new(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Self::new(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{assert_component_eq, HexFormat};

    #[test]
    fn dispatch_on_first_character() {
        assert_eq!(Color::from_string("#abc").unwrap().source().format(), ColorFormat::Hex);
        assert_eq!(
            Color::from_string("rgba(1, 2, 3, 0.5)").unwrap().source().format(),
            ColorFormat::Rgb
        );
        assert_eq!(
            Color::from_string("hsl(1, 2%, 3%)").unwrap().source().format(),
            ColorFormat::Hsl
        );
        for s in ["blue", "", " rgb(1, 2, 3)", "(1, 2, 3)", "rgb(1/2/3)"] {
            assert_eq!(
                Color::from_string(s).unwrap_err(),
                Error::InvalidColorString(s.to_string())
            );
        }
    }

    #[test]
    fn parse_errors_propagate() {
        assert_eq!(
            Color::from_string("#abz").unwrap_err(),
            Error::InvalidColorString("#abz".to_string())
        );
        assert_eq!(
            Color::from_string("rgb(256, 0, 0)").unwrap_err(),
            Error::InvalidColorString("rgb(256, 0, 0)".to_string())
        );
    }

    #[test]
    fn same_notation_is_identity() {
        let color = Color::new(Rgb::new(43.0, 128.0, 255.0, None).unwrap());
        let ColorSource::Rgb(source) = color.source() else {
            panic!("expected an rgb source");
        };
        assert!(std::ptr::eq(color.to_rgb(), source));

        let color = Color::from_string("#abc").unwrap();
        let ColorSource::Hex(source) = color.source() else {
            panic!("expected a hex source");
        };
        assert!(std::ptr::eq(color.to_hex(), source));
        assert!(std::ptr::eq(color.to_rgb(), source.rgb()));

        let color = Color::from_string("hsl(1, 2%, 3%)").unwrap();
        let ColorSource::Hsl(source) = color.source() else {
            panic!("expected an hsl source");
        };
        assert!(std::ptr::eq(color.to_hsl(), source));
    }

    #[test]
    fn conversions_are_memoized() {
        let color = Color::from_string("hsl(216, 100%, 58%)").unwrap();
        assert!(std::ptr::eq(color.to_rgb(), color.to_rgb()));
        assert!(std::ptr::eq(color.to_hex(), color.to_hex()));
    }

    #[test]
    fn lossy_round_trip() {
        let color = Color::new(Rgb::new(43.0, 128.0, 255.0, None).unwrap());
        let hsl = color.to_hsl();
        assert_eq!(hsl.value_of(), [216.0, 100.0, 58.0, 1.0]);

        let back = Color::new(hsl.clone());
        assert_eq!(back.to_rgb().value_of(), [41.0, 126.0, 255.0, 1.0]);
    }

    #[test]
    fn hsl_to_hex_goes_through_rgb() {
        let color = Color::from_string("hsl(216, 100%, 58%)").unwrap();
        assert_eq!(color.to_hex().literal(), "#297eff");
        assert_eq!(color.to_format(ColorFormat::Hex), "#297eff");

        let color = Color::from_string("#2b80ff").unwrap();
        assert_eq!(color.to_hsl().value_of(), [216.0, 100.0, 58.0, 1.0]);
    }

    #[test]
    fn alpha_is_carried() {
        let color = Color::from_string("hsla(0, 100%, 50%, 0.5)").unwrap();
        assert_eq!(color.alpha(), 0.5);
        assert_eq!(color.to_rgb().to_string(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(color.to_hex().to_string(), "#ff000080");

        let color = Color::from_string("#ff000080").unwrap();
        assert_eq!(
            color.to_format(ColorFormat::Hsl),
            format!("hsla(0, 100, 50, {})", 128.0 / 255.0)
        );
    }

    #[test]
    fn display_prefers_original() {
        let color = Color::from_string("rgb(128 64 16)").unwrap();
        assert_eq!(color.to_string(), "rgb(128 64 16)");
        assert_eq!(color.to_format(ColorFormat::Rgb), "rgb(128, 64, 16)");

        let color = Color::from_string("#ABC").unwrap();
        assert_eq!(color.to_string(), "#ABC");
        assert_eq!(color.to_format(ColorFormat::Hex), "#abc");

        let color = Color::new(Hsl::new(10.0, 20.0, 30.0, None).unwrap());
        assert_eq!(color.to_string(), "hsl(10, 20, 30)");
    }

    #[test]
    fn format_options() {
        let color = Color::from_string("#aabbcc").unwrap();
        assert_eq!(
            color.to_format_with(ColorFormat::Hex, &FormatOptions::hex(HexFormat::Short)),
            "#abc"
        );
        assert_eq!(
            color.to_format_with(ColorFormat::Rgb, &FormatOptions::with_alpha()),
            "rgba(170, 187, 204, 1)"
        );
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(Error::UnsupportedFormat("cmyk".to_string()))
        );
        assert_eq!("HSL".parse::<ColorFormat>(), Ok(ColorFormat::Hsl));
    }

    #[test]
    fn luminance() {
        let red = Color::new(Rgb::new(255.0, 0.0, 0.0, None).unwrap());
        assert_eq!(red.luminance(), 53.55);

        let white = Color::from_string("#fff").unwrap();
        assert_component_eq!(white.luminance(), 255.0);

        let black = Color::from_string("hsl(0, 0%, 0%)").unwrap();
        assert_eq!(black.luminance(), 0.0);
    }

    #[test]
    fn dynamic_values() {
        let color = Color::from_value(&json!("#abc")).unwrap();
        assert_eq!(color.to_rgb().value_of(), [170.0, 187.0, 204.0, 1.0]);

        let color = Color::from_value(&json!({"r": 1, "g": 2, "b": 3, "a": 0.5})).unwrap();
        assert_eq!(color.to_rgb().value_of(), [1.0, 2.0, 3.0, 0.5]);

        let color = Color::from_value(&json!({"h": 120, "s": 100, "l": 50})).unwrap();
        assert_eq!(color.to_rgb().value_of(), [0.0, 255.0, 0.0, 1.0]);

        for value in [json!(null), json!(42), json!([1, 2, 3]), json!({"r": "x"}), json!({})] {
            assert_eq!(
                Color::from_value(&value).unwrap_err(),
                Error::InvalidColorValue(value.to_string())
            );
        }

        assert!(matches!(
            Color::from_value(&json!({"r": 1, "g": 2, "b": 300})),
            Err(Error::InvalidColorRange { channel: "blue", .. })
        ));
    }
}
