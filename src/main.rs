//! testdrive CLI
//!
//! Runs the automated test suite for a configured build directory,
//! fetching versioned test fixtures first when they are missing.

use clap::Parser;

use testdrive::cli::Cli;
use testdrive::config::{DriverConfig, FileConfig, Validate};
use testdrive::driver::TestDriver;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => match FileConfig::load(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let config = DriverConfig::resolve(&cli, file);

    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.is_valid() {
        for error in &validation.errors {
            eprintln!("{}", error);
        }
        std::process::exit(1);
    }

    match TestDriver::new(config).run() {
        Ok(summary) => {
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("failed to serialize run summary: {}", e),
                }
            }
            std::process::exit(summary.test_exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
