//! Render the interpolated points between two colors in every interpolation
//! space, one row per space, and write the result to a PNG.
//!
//! Usage: `chromaview-ramp [FROM] [TO] [OUTPUT] [CONFIG]` where `FROM` and
//! `TO` are hex colors.

use chromaview::{prelude::*, PaletteError};
use image::RgbImage;

const WIDTH: u32 = 1000;
const HEIGHT_PER_SPACE: u32 = 100;

/// Build a palette between `from` and `to` and return every point in order.
fn palette_ramp(
    config: &PaletteConfig,
    space: InterpolationSpace,
    from: Rgb,
    to: Rgb,
) -> Result<Vec<Rgb>, PaletteError> {
    let mut palette = Palette::new(PaletteConfig {
        interpolation_space: space,
        ..config.clone()
    });
    palette.edit_selected(Edit::Rgb(from))?;
    palette.add_point(to);
    palette.enable_configured_interpolation()?;

    Ok(palette.iter().map(|color| color.rgb()).collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let from: Rgb = args.next().as_deref().unwrap_or("#ff0000").parse()?;
    let to: Rgb = args.next().as_deref().unwrap_or("#0000ff").parse()?;
    let output = args.next().unwrap_or_else(|| "out.png".to_string());
    let config = match args.next() {
        Some(path) => PaletteConfig::load(path)?,
        None => PaletteConfig::default(),
    };

    let spaces = [
        InterpolationSpace::Rgb,
        InterpolationSpace::Hls,
        InterpolationSpace::Hsv,
    ];
    let rows = spaces
        .iter()
        .map(|&space| palette_ramp(&config, space, from, to))
        .collect::<Result<Vec<_>, _>>()?;

    let height = rows.len() as u32 * HEIGHT_PER_SPACE;
    let mut img = RgbImage::new(WIDTH, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = &rows[(y / HEIGHT_PER_SPACE) as usize];
        let swatch = (x as usize * row.len()) / WIDTH as usize;
        *pixel = image::Rgb(row[swatch].to_bytes());
    }

    for (space, row) in spaces.iter().zip(&rows) {
        let hexes = row.iter().map(Rgb::to_hex).collect::<Vec<_>>();
        log::info!("{:?}: {}", space, hexes.join(" "));
    }

    img.save(&output)?;
    log::info!("Wrote {}", output);

    Ok(())
}
