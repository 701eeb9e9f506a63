//! Generator parameters
//!
//! Every value has a built-in default matching the constants in
//! [`crate::constants`]. The no-argument binaries use the defaults directly;
//! `generate --config <file>` can override any subset of fields from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Result, TextureError};

/// Parameters for the continent (Earth day/normal/specular) texture set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthConfig {
    pub width: u32,
    pub height: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
    /// Directory the three files are written into
    pub output_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EarthConfig {
    fn default() -> Self {
        Self {
            width: EARTH_DEFAULT_WIDTH,
            height: EARTH_DEFAULT_HEIGHT,
            quality: EARTH_JPEG_QUALITY,
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

/// Parameters for the placeholder Earth/Mars/Sun set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Root holding the `earth/`, `mars/` and `sun/` directories
    pub output_dir: PathBuf,
    pub quality: u8,
    /// [width, height]
    pub earth_size: [u32; 2],
    pub mars_size: [u32; 2],
    pub sun_size: [u32; 2],
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(PLACEHOLDER_OUTPUT_DIR),
            quality: PLACEHOLDER_JPEG_QUALITY,
            earth_size: PLACEHOLDER_EARTH_SIZE,
            mars_size: PLACEHOLDER_MARS_SIZE,
            sun_size: PLACEHOLDER_SUN_SIZE,
        }
    }
}

/// Top-level config file layout (`[earth]` and `[placeholders]` tables)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub earth: EarthConfig,
    pub placeholders: PlaceholderConfig,
}

impl TextureConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TextureError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| TextureError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero sizes and out-of-range JPEG qualities
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            [self.earth.width, self.earth.height],
            self.placeholders.earth_size,
            self.placeholders.mars_size,
            self.placeholders.sun_size,
        ];
        for [width, height] in sizes {
            if width == 0 || height == 0 {
                return Err(TextureError::InvalidSize { width, height });
            }
        }
        for quality in [self.earth.quality, self.placeholders.quality] {
            if !(1..=100).contains(&quality) {
                return Err(TextureError::InvalidQuality(quality));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TextureConfig::default();
        assert_eq!(config.earth.width, 1024);
        assert_eq!(config.earth.height, 512);
        assert_eq!(config.earth.quality, 95);
        assert_eq!(config.earth.seed, None);
        assert_eq!(config.placeholders.output_dir, PathBuf::from("assets"));
        assert_eq!(config.placeholders.quality, 85);
        assert_eq!(config.placeholders.sun_size, [512, 512]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[earth]
width = 256
seed = 7

[placeholders]
output_dir = "out/textures"
"#;
        let config = TextureConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.earth.width, 256);
        assert_eq!(config.earth.height, 512);
        assert_eq!(config.earth.seed, Some(7));
        assert_eq!(
            config.placeholders.output_dir,
            PathBuf::from("out/textures")
        );
        assert_eq!(config.placeholders.mars_size, [512, 256]);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(
            TextureConfig::from_toml_str("").unwrap(),
            TextureConfig::default()
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            TextureConfig::from_toml_str("[earth]\nheight = 0"),
            Err(TextureError::InvalidSize { .. })
        ));
        assert!(matches!(
            TextureConfig::from_toml_str("[placeholders]\nquality = 0"),
            Err(TextureError::InvalidQuality(0))
        ));
        assert!(matches!(
            TextureConfig::from_toml_str("[earth]\nwidth = \"wide\""),
            Err(TextureError::Config { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textures.toml");
        fs::write(&path, "[placeholders]\nsun_size = [64, 64]\n").unwrap();
        let config = TextureConfig::load(&path).unwrap();
        assert_eq!(config.placeholders.sun_size, [64, 64]);

        assert!(matches!(
            TextureConfig::load(&dir.path().join("missing.toml")),
            Err(TextureError::Io { .. })
        ));
    }
}
