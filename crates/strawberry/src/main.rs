// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strawberry - plugin descriptor generator for Paper and Velocity.
//!
//! This is the command-line host for the descriptor generation step.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strawberry_config::{StrawberryConfig, DEFAULT_CONFIG_FILE};

/// Strawberry - plugin descriptor generator for Paper and Velocity.
#[derive(Parser, Debug)]
#[command(name = "strawberry", version, about, long_about = None)]
struct Cli {
    /// Log level for strawberry crates (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the plugin description and write the platform manifests.
    Generate {
        /// Path to the plugin description.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Directory the manifests are written into.
        #[arg(long, default_value = commands::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
    /// Validate the plugin description without writing anything.
    Validate {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// List the platforms the plugin description targets.
    Platforms {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Generate { config, output } => {
            commands::run_generate(&load_or_exit(&config), &output).map(|_| ())
        }
        Commands::Validate { config } => commands::run_validate(&load_or_exit(&config)),
        Commands::Platforms { config } => {
            commands::run_platforms(&load_or_exit(&config));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn load_or_exit(path: &std::path::Path) -> StrawberryConfig {
    match commands::load_config(path) {
        Ok(config) => config,
        Err(errors) => {
            strawberry_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("strawberry={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
