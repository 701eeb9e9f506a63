//! Texture generators
//!
//! - Continent Earth texture with derived normal and specular maps
//! - Deterministic placeholder Earth, Mars and Sun textures

pub mod continents;
pub mod maps;
pub mod placeholders;
