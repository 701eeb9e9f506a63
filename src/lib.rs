//! Planet textures - procedural placeholder textures for a 3D solar-system scene
//!
//! Two independent generators:
//! - [`generate::continents`]: Earth day texture with jittered continents,
//!   polar caps and clouds, plus derived normal and specular maps
//! - [`generate::placeholders`]: index-derived Earth, Mars and Sun textures
//!   written into an `earth/`, `mars/`, `sun/` layout

pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod logging;
pub mod raster;
pub mod report;

pub use config::{EarthConfig, PlaceholderConfig, TextureConfig};
pub use error::{Result, TextureError};
pub use generate::continents::{EarthTextureSet, generate_earth_texture};
pub use generate::placeholders::{FlareSegment, flare_segments};
pub use raster::RasterImage;
pub use report::FileEntry;
