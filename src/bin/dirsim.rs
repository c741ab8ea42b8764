//! dirsim CLI binary
//!
//! Command-line interface for content-based directory tree similarity.

use clap::Parser;
use dirsim::cli::{map_error, Cli, RunContext};
use dirsim::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("dirsim starting");

    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(rendered) => {
            info!("Command completed successfully");
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // Without --verbose, only explicit flag or env overrides log.
    let mut config = LoggingConfig::default();
    if !cli.verbose {
        config.level = "off".to_string();
    }
    if let Some(level) = &cli.log_level {
        config.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.format = format.clone();
    }
    config
}
