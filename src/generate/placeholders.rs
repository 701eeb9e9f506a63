//! Placeholder Earth, Mars and Sun textures
//!
//! No randomness: every landmass, crater and flare is placed by modular
//! arithmetic on its loop index, so the same sizes always give the same pixels.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::PlaceholderConfig;
use crate::constants::*;
use crate::error::{Result, TextureError};
use crate::raster::{RasterImage, canvas, draw_thick_line, fill_ellipse_in_box, save_jpeg};
use crate::report::{FileEntry, collect_jpeg_sizes};

/// One radial sun flare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlareSegment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub color: [u8; 3],
}

/// Blue base with eight green/brown ellipse landmasses
pub fn earth_color(width: u32, height: u32) -> Result<RasterImage> {
    let mut img = canvas(width, height, PLACEHOLDER_OCEAN)?;
    let half_height = (height / 2).max(1);

    for i in 0..PLACEHOLDER_LANDMASSES {
        let x = i * width / PLACEHOLDER_LANDMASSES + (i * 20) % width;
        let y = height / 4 + (i * 30) % half_height;
        let w = 40 + (i * 15) % 80;
        let h = 20 + (i * 10) % 40;
        let color = if i % 2 == 1 {
            PLACEHOLDER_LAND_GREEN
        } else {
            PLACEHOLDER_LAND_BROWN
        };
        let (x, y) = (x as i32, y as i32);
        fill_ellipse_in_box(&mut img, [x, y, x + w as i32, y + h as i32], color);
    }

    Ok(img)
}

/// Solid blue-dominated specular stand-in (not derived from the color map)
pub fn earth_specular(width: u32, height: u32) -> Result<RasterImage> {
    canvas(width, height, PLACEHOLDER_EARTH_SPEC)
}

/// Rust-orange base with twelve darker craters
pub fn mars_color(width: u32, height: u32) -> Result<RasterImage> {
    let mut img = canvas(width, height, MARS_RUST)?;

    for i in 0..MARS_CRATERS {
        let x = ((i * 47) % width) as i32;
        let y = ((i * 37) % height) as i32;
        let r = (15 + (i * 7) % 25) as i32;
        let color = [
            (120 + (i * 10) % 40) as u8,
            (60 + (i * 8) % 30) as u8,
            (30 + (i * 5) % 20) as u8,
        ];
        fill_ellipse_in_box(&mut img, [x - r, y - r, x + r, y + r], color);
    }

    Ok(img)
}

/// The twenty flares of the sun texture, 18 degrees apart around the center.
/// Color shifts from orange toward yellow with the index.
pub fn flare_segments(width: u32, height: u32) -> Vec<FlareSegment> {
    let center_x = (width / 2) as f32;
    let center_y = (height / 2) as f32;

    (0..SUN_FLARES)
        .map(|i| {
            let angle = (i as f32 * SUN_FLARE_STEP_DEG).to_radians();
            let r1 = (50 + (i * 13) % 100) as f32;
            let r2 = r1 + SUN_FLARE_LENGTH;
            let (sin, cos) = angle.sin_cos();
            FlareSegment {
                start: (center_x + r1 * cos, center_y + r1 * sin),
                end: (center_x + r2 * cos, center_y + r2 * sin),
                color: [255, (150 + (i * 10) % 100) as u8, 20],
            }
        })
        .collect()
}

/// Bright yellow base with radial flares
pub fn sun_color(width: u32, height: u32) -> Result<RasterImage> {
    let mut img = canvas(width, height, SUN_YELLOW)?;
    for flare in flare_segments(width, height) {
        draw_thick_line(&mut img, flare.start, flare.end, SUN_FLARE_WIDTH, flare.color);
    }
    Ok(img)
}

/// Write the six placeholder files under `config.output_dir`, creating the
/// `earth/`, `mars/` and `sun/` directories. Any failure aborts the set.
pub fn write_placeholder_set(config: &PlaceholderConfig) -> Result<Vec<PathBuf>> {
    let root = &config.output_dir;
    for dir in [EARTH_DIR, MARS_DIR, SUN_DIR] {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| TextureError::io(&path, e))?;
    }

    let [earth_w, earth_h] = config.earth_size;
    let [mars_w, mars_h] = config.mars_size;
    let [sun_w, sun_h] = config.sun_size;

    let earth = earth_color(earth_w, earth_h)?;
    let earth_spec = earth_specular(earth_w, earth_h)?;
    let mars = mars_color(mars_w, mars_h)?;
    let sun = sun_color(sun_w, sun_h)?;

    // Normal maps are the color maps saved again
    let outputs: [(&str, &str, &RasterImage); 6] = [
        (EARTH_DIR, EARTH_DAY_FILE, &earth),
        (EARTH_DIR, EARTH_NORMAL_FILE, &earth),
        (EARTH_DIR, EARTH_SPEC_FILE, &earth_spec),
        (MARS_DIR, MARS_COLOR_FILE, &mars),
        (MARS_DIR, MARS_NORMAL_FILE, &mars),
        (SUN_DIR, SUN_COLOR_FILE, &sun),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (dir, file, img) in outputs {
        let path = root.join(dir).join(file);
        save(img, &path, config.quality)?;
        written.push(path);
    }
    Ok(written)
}

/// Write the placeholder set, then list every JPEG under the output root.
pub fn run(config: &PlaceholderConfig) -> Result<Vec<FileEntry>> {
    info!(
        output_dir = %config.output_dir.display(),
        "Generating placeholder textures"
    );
    write_placeholder_set(config)?;
    collect_jpeg_sizes(&config.output_dir)
}

fn save(img: &RasterImage, path: &Path, quality: u8) -> Result<()> {
    save_jpeg(img, path, quality)?;
    info!("Saved {}", path.display());
    Ok(())
}
