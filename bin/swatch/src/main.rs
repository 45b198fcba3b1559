//! Render a strip of color swatches. Each swatch carries a bar in whichever
//! of two colors contrasts with it, the way text would be placed on top.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use tinct::{prepare_contrasting_value, Color, ContrastOptions, DEFAULT_THRESHOLD};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tinct-swatch")]
#[command(about = "Render color swatches with a contrasting bar")]
struct Cli {
    /// Colors in rgb(), hsl() or hex notation.
    #[arg(required = true)]
    colors: Vec<String>,

    /// Where to write the PNG.
    #[arg(short, long, default_value = "swatches.png")]
    output: PathBuf,

    /// Edge length of each swatch in pixels.
    #[arg(short, long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(4..))]
    size: u32,

    /// Luminance at and above which a swatch counts as light.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Bar color for light swatches.
    #[arg(long, default_value = "#000000")]
    on_light: String,

    /// Bar color for dark swatches.
    #[arg(long, default_value = "#ffffff")]
    on_dark: String,
}

fn pixel(color: &Color) -> Rgba<u8> {
    let [red, green, blue, alpha] = color.to_rgb().value_of();
    let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Rgba([byte(red), byte(green), byte(blue), byte(alpha * 255.0)])
}

fn parse_color(value: &str) -> anyhow::Result<Color> {
    Color::from_string(value).with_context(|| format!("could not parse color {value:?}"))
}

/// Width of a strip of `count` swatches, each `size` pixels wide.
fn strip_width(size: u32, count: usize) -> anyhow::Result<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(size))
        .filter(|&width| i32::try_from(width).is_ok())
        .with_context(|| format!("{count} swatches of {size} pixels do not fit in one image"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct_swatch=info,tinct=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let colors = cli
        .colors
        .iter()
        .map(|value| parse_color(value))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let pick = prepare_contrasting_value(ContrastOptions {
        light: pixel(&parse_color(&cli.on_light)?),
        dark: pixel(&parse_color(&cli.on_dark)?),
        threshold: cli.threshold,
    });

    let size = cli.size;
    let bar = size / 4;
    let mut img = RgbaImage::new(strip_width(size, colors.len())?, size);

    // The whole strip fits in an i32, so every offset into it does too.
    for (x, color) in (0..).step_by(size as usize).zip(&colors) {
        draw_filled_rect_mut(&mut img, Rect::at(x, 0).of_size(size, size), pixel(color));
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, (size - bar) as i32).of_size(size, bar),
            pick(color),
        );

        tracing::info!(
            color = %color,
            hex = %color.to_hex(),
            luminance = color.luminance(),
            "rendered swatch"
        );
    }

    img.save(&cli.output)
        .with_context(|| format!("could not write image to {}", cli.output.display()))?;

    tracing::info!(path = %cli.output.display(), count = colors.len(), "wrote swatches");
    Ok(())
}
