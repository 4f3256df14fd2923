//! CLI command definitions and dispatch for the `pform` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod presets;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Wire prompt presets to a hosted text-generation backend.
#[derive(Parser)]
#[command(name = "pform", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the form server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "7860")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// List the built-in presets.
    #[command(alias = "ls")]
    Presets,

    /// Render a preset's template locally without calling the backend.
    Render {
        /// Preset name (e.g. customer-support).
        preset: String,

        /// Field values as name=value pairs.
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
