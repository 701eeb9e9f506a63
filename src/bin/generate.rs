//! Unified texture generator
//!
//! Runs either generator (or both) with optional overrides.
//!
//! Usage:
//!   cargo run --bin generate earth                     # Continent Earth set
//!   cargo run --bin generate placeholders              # Earth/Mars/Sun placeholders
//!   cargo run --bin generate all                       # Both
//!   cargo run --bin generate earth --seed 42           # Reproducible continents
//!   cargo run --bin generate all --config textures.toml
//!   cargo run --bin generate --help                    # Show help

use std::path::PathBuf;
use std::process::ExitCode;

use planet_textures::generate::{continents, placeholders};
use planet_textures::logging::init_logging;
use planet_textures::{TextureConfig, report};
use tracing::error;

/// Flags accepted after the command
#[derive(Default)]
struct Options {
    config: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    if matches!(command, "--help" | "-h" | "help") {
        print_help();
        return ExitCode::SUCCESS;
    }

    let options = match parse_options(&args[2..]) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    init_logging();

    let mut config = match &options.config {
        Some(path) => match TextureConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => TextureConfig::default(),
    };
    if options.seed.is_some() {
        config.earth.seed = options.seed;
    }

    let result = match command {
        "earth" | "continents" => {
            println!("=== Continent Texture Generator ===\n");
            run_earth(&config)
        }
        "placeholders" | "placeholder" => {
            println!("=== Placeholder Texture Generator ===\n");
            run_placeholders(&config)
        }
        "all" => {
            println!("=== Continent Texture Generator ===\n");
            run_earth(&config).and_then(|()| {
                println!("\n=== Placeholder Texture Generator ===\n");
                run_placeholders(&config)
            })
        }
        other => {
            eprintln!("Error: Unknown command '{}'\n", other);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_earth(config: &TextureConfig) -> planet_textures::Result<()> {
    let written = continents::run(&config.earth)?;
    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    println!("Generated Earth textures: {}", names.join(", "));
    Ok(())
}

fn run_placeholders(config: &TextureConfig) -> planet_textures::Result<()> {
    let entries = placeholders::run(&config.placeholders)?;
    println!("Generated placeholder textures:");
    report::print_report(&entries);
    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("'--config' requires a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("'--seed' requires a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed '{}'", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    Ok(options)
}

fn print_help() {
    println!(
        r#"Texture Generator - Generate placeholder planet textures

USAGE:
    cargo run --bin generate <COMMAND> [OPTIONS]

COMMANDS:
    earth           Generate the continent Earth texture set
                    Output: earth_day.jpg, earth_normal.jpg, earth_spec.jpg

    placeholders    Generate placeholder Earth, Mars and Sun textures
                    Output: assets/earth/, assets/mars/, assets/sun/

    all             Run both generators

    help            Show this help message

OPTIONS:
    --config <FILE>   TOML file overriding sizes, quality and output dirs
    --seed <N>        Fixed seed for the continent generator

EXAMPLES:
    cargo run --bin generate earth
    cargo run --bin generate earth --seed 42
    cargo run --bin generate all --config textures.toml
"#
    );
}
