//! Fixed colors, sizes and file names for every generated texture
//!
//! All generator constants live here so the look of each body can be tweaked
//! in one place.

// =============================================================================
// CONTINENT TEXTURE (earth_texture)
// =============================================================================

pub const EARTH_DEFAULT_WIDTH: u32 = 1024;
pub const EARTH_DEFAULT_HEIGHT: u32 = 512;
pub const EARTH_JPEG_QUALITY: u8 = 95;

pub const OCEAN_BLUE: [u8; 3] = [0, 0, 128];
pub const FOREST_GREEN: [u8; 3] = [34, 139, 34];
pub const DESERT_BROWN: [u8; 3] = [160, 82, 45];
pub const ICE_WHITE: [u8; 3] = [255, 255, 255];

/// Points sampled around each continent's center
pub const COASTLINE_STEPS: usize = 20;
/// Radius of a continent as a fraction of its bounding box extent
pub const COASTLINE_RADIUS: f64 = 0.4;
/// Per-point radius jitter range (uniform)
pub const COASTLINE_JITTER_MIN: f64 = 0.8;
pub const COASTLINE_JITTER_MAX: f64 = 1.2;
/// Probability that a mid-latitude continent is desert
pub const DESERT_CHANCE: f64 = 0.3;

/// Latitude band (fraction of height) that counts as polar for continent color
pub const POLAR_BAND: f64 = 0.15;
/// Latitude band (fraction of height) that counts as high latitude
pub const HIGH_LATITUDE_BAND: f64 = 0.3;

pub const CLOUD_COUNT: usize = 50;
pub const CLOUD_MARGIN: u32 = 50; // Cloud origin stays this far from the right/bottom edge
pub const CLOUD_WIDTH_MIN: u32 = 20;
pub const CLOUD_WIDTH_MAX: u32 = 80;
pub const CLOUD_HEIGHT_MIN: u32 = 10;
pub const CLOUD_HEIGHT_MAX: u32 = 40;
pub const CLOUD_ALPHA_MIN: u8 = 30;
pub const CLOUD_ALPHA_MAX: u8 = 100;

pub const EARTH_DAY_FILE: &str = "earth_day.jpg";
pub const EARTH_NORMAL_FILE: &str = "earth_normal.jpg";
pub const EARTH_SPEC_FILE: &str = "earth_spec.jpg";

// =============================================================================
// DERIVED MAPS
// =============================================================================

pub const SPECULAR_WATER: u8 = 255; // Shiny
pub const SPECULAR_LAND: u8 = 32; // Rough
/// Minimum blue channel for a pixel to count as water
pub const WATER_BLUE_THRESHOLD: u8 = 100;

// =============================================================================
// PLACEHOLDER BODIES (placeholder_textures)
// =============================================================================

pub const PLACEHOLDER_JPEG_QUALITY: u8 = 85;
pub const PLACEHOLDER_OUTPUT_DIR: &str = "assets";

pub const PLACEHOLDER_EARTH_SIZE: [u32; 2] = [512, 256];
pub const PLACEHOLDER_MARS_SIZE: [u32; 2] = [512, 256];
pub const PLACEHOLDER_SUN_SIZE: [u32; 2] = [512, 512];

pub const PLACEHOLDER_OCEAN: [u8; 3] = [30, 60, 120]; // Deep blue
pub const PLACEHOLDER_LAND_GREEN: [u8; 3] = [34, 85, 34];
pub const PLACEHOLDER_LAND_BROWN: [u8; 3] = [101, 67, 33];
pub const PLACEHOLDER_EARTH_SPEC: [u8; 3] = [20, 40, 100]; // Blue-dominated for water
pub const PLACEHOLDER_LANDMASSES: u32 = 8;

pub const MARS_RUST: [u8; 3] = [160, 82, 45];
pub const MARS_CRATERS: u32 = 12;

pub const SUN_YELLOW: [u8; 3] = [255, 200, 50];
pub const SUN_FLARES: u32 = 20;
pub const SUN_FLARE_STEP_DEG: f32 = 18.0;
pub const SUN_FLARE_LENGTH: f32 = 30.0;
pub const SUN_FLARE_WIDTH: f32 = 3.0;

pub const EARTH_DIR: &str = "earth";
pub const MARS_DIR: &str = "mars";
pub const SUN_DIR: &str = "sun";

pub const MARS_COLOR_FILE: &str = "mars_color.jpg";
pub const MARS_NORMAL_FILE: &str = "mars_normal.jpg";
pub const SUN_COLOR_FILE: &str = "sun_color.jpg";
