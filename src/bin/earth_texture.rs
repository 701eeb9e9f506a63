//! Continent Earth Texture Generator
//!
//! Writes earth_day.jpg, earth_normal.jpg and earth_spec.jpg (1024x512) to
//! the current directory.
//!
//! Run with: `cargo run --bin earth_texture`

use std::process::ExitCode;

use planet_textures::EarthConfig;
use planet_textures::generate::continents;
use planet_textures::logging::init_logging;
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    match continents::run(&EarthConfig::default()) {
        Ok(_) => {
            println!("Generated Earth textures: earth_day.jpg, earth_normal.jpg, earth_spec.jpg");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
