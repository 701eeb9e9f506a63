//! Earth-like continent texture generator
//!
//! Draws jittered polygon continents on an ocean fill, paints solid polar
//! caps, then alpha-blends white cloud patches on top. Derives a normal map
//! and a specular map from the finished day texture.
//!
//! The random source is passed in explicitly so callers can seed it.

use std::f64::consts::TAU;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::maps::{normal_map, specular_map};
use crate::config::EarthConfig;
use crate::constants::*;
use crate::error::{Result, TextureError};
use crate::raster::{RasterImage, blend_rect, canvas, fill_polygon, fill_rows, save_jpeg};

/// Continent bounding box as fractions of the texture size
#[derive(Debug, Clone, Copy)]
pub struct ContinentBox {
    pub name: &'static str,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ContinentBox {
    /// Pixel box `[x1, y1, x2, y2]`, truncated toward zero
    pub fn pixel_box(&self, width: u32, height: u32) -> [i32; 4] {
        let (w, h) = (width as f64, height as f64);
        [
            (w * self.x1) as i32,
            (h * self.y1) as i32,
            (w * self.x2) as i32,
            (h * self.y2) as i32,
        ]
    }
}

/// Drawn in order; later continents overwrite earlier ones where they overlap
pub const CONTINENTS: [ContinentBox; 5] = [
    ContinentBox { name: "north_america", x1: 0.15, y1: 0.25, x2: 0.35, y2: 0.45 },
    ContinentBox { name: "eurasia", x1: 0.45, y1: 0.2, x2: 0.85, y2: 0.5 },
    ContinentBox { name: "africa", x1: 0.45, y1: 0.45, x2: 0.65, y2: 0.75 },
    ContinentBox { name: "south_america", x1: 0.25, y1: 0.5, x2: 0.4, y2: 0.85 },
    ContinentBox { name: "australia", x1: 0.75, y1: 0.65, x2: 0.85, y2: 0.75 },
];

/// Day color, normal and specular maps for one generated Earth
pub struct EarthTextureSet {
    pub day: RasterImage,
    pub normal: RasterImage,
    pub specular: RasterImage,
}

impl EarthTextureSet {
    pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<Self> {
        let day = generate_earth_texture(width, height, rng)?;
        let normal = normal_map(&day);
        let specular = specular_map(&day);
        Ok(Self {
            day,
            normal,
            specular,
        })
    }

    /// Write `earth_day.jpg`, `earth_normal.jpg` and `earth_spec.jpg` into `dir`,
    /// creating it if needed. Returns the written paths in that order.
    pub fn save(&self, dir: &Path, quality: u8) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|e| TextureError::io(dir, e))?;

        let outputs = [
            (EARTH_DAY_FILE, &self.day),
            (EARTH_NORMAL_FILE, &self.normal),
            (EARTH_SPEC_FILE, &self.specular),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (file, img) in outputs {
            let path = dir.join(file);
            save_jpeg(img, &path, quality)?;
            info!("Saved {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// Generate and save the continent texture set described by `config`.
pub fn run(config: &EarthConfig) -> Result<Vec<PathBuf>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        width = config.width,
        height = config.height,
        seed = ?config.seed,
        "Generating continent texture set"
    );
    let set = EarthTextureSet::generate(config.width, config.height, &mut rng)?;
    set.save(&config.output_dir, config.quality)
}

/// Draw the day-color Earth texture.
pub fn generate_earth_texture<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<RasterImage> {
    let mut img = canvas(width, height, OCEAN_BLUE)?;

    for continent in &CONTINENTS {
        let bbox = continent.pixel_box(width, height);
        let coastline = coastline_points(bbox, rng);
        let color = continent_color(bbox[1], height, rng);
        debug!(continent = continent.name, ?bbox, ?color, "drawing continent");
        fill_polygon(&mut img, &coastline, color);
    }

    let (north, south) = polar_cap_rows(height);
    fill_rows(&mut img, north, ICE_WHITE);
    fill_rows(&mut img, south, ICE_WHITE);

    draw_clouds(&mut img, rng);

    Ok(img)
}

/// Irregular closed coastline around the center of `bbox`.
/// Each sample's radius is scaled by its own uniform jitter.
pub fn coastline_points<R: Rng + ?Sized>(bbox: [i32; 4], rng: &mut R) -> Vec<(i32, i32)> {
    let [x1, y1, x2, y2] = bbox;
    let extent_x = (x2 - x1) as f64;
    let extent_y = (y2 - y1) as f64;
    let center_x = x1 as f64 + extent_x * 0.5;
    let center_y = y1 as f64 + extent_y * 0.5;

    (0..COASTLINE_STEPS)
        .map(|i| {
            let angle = TAU * i as f64 / COASTLINE_STEPS as f64;
            let noise = rng.gen_range(COASTLINE_JITTER_MIN..=COASTLINE_JITTER_MAX);
            let x = center_x + noise * extent_x * COASTLINE_RADIUS * angle.cos();
            let y = center_y + noise * extent_y * COASTLINE_RADIUS * angle.sin();
            (x as i32, y as i32)
        })
        .collect()
}

/// Pick a continent color from the latitude of its top edge.
/// Only mid-latitude continents consume a random draw.
pub fn continent_color<R: Rng + ?Sized>(top: i32, height: u32, rng: &mut R) -> [u8; 3] {
    let top = top as f64;
    let h = height as f64;

    if top < h * HIGH_LATITUDE_BAND || top > h * (1.0 - HIGH_LATITUDE_BAND) {
        if top < h * POLAR_BAND || top > h * (1.0 - POLAR_BAND) {
            ICE_WHITE
        } else {
            FOREST_GREEN
        }
    } else if rng.gen_bool(DESERT_CHANCE) {
        DESERT_BROWN
    } else {
        FOREST_GREEN
    }
}

/// Rows covered by the north and south ice caps
pub fn polar_cap_rows(height: u32) -> (Range<u32>, Range<u32>) {
    let h = height as f64;
    let north_end = (h * POLAR_BAND) as u32;
    let south_start = (h * (1.0 - POLAR_BAND)) as u32;
    (0..north_end, south_start..height)
}

fn draw_clouds<R: Rng + ?Sized>(img: &mut RasterImage, rng: &mut R) {
    let max_x = img.width().saturating_sub(CLOUD_MARGIN);
    let max_y = img.height().saturating_sub(CLOUD_MARGIN);

    for _ in 0..CLOUD_COUNT {
        let x = rng.gen_range(0..=max_x);
        let y = rng.gen_range(0..=max_y);
        let w = rng.gen_range(CLOUD_WIDTH_MIN..=CLOUD_WIDTH_MAX);
        let h = rng.gen_range(CLOUD_HEIGHT_MIN..=CLOUD_HEIGHT_MAX);
        let alpha = rng.gen_range(CLOUD_ALPHA_MIN..=CLOUD_ALPHA_MAX);
        blend_rect(img, (x, y), (w, h), ICE_WHITE, alpha);
    }
}
