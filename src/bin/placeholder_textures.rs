//! Placeholder Texture Generator
//!
//! Writes the Earth, Mars and Sun placeholders under assets/ and prints the
//! size of every JPEG found there.
//!
//! Run with: `cargo run --bin placeholder_textures`

use std::process::ExitCode;

use planet_textures::PlaceholderConfig;
use planet_textures::generate::placeholders;
use planet_textures::logging::init_logging;
use planet_textures::report::print_report;
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    match placeholders::run(&PlaceholderConfig::default()) {
        Ok(entries) => {
            println!("Generated placeholder textures:");
            print_report(&entries);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
