//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vcap")]
#[command(about = "Inspect Cloud Foundry VCAP descriptors", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .vcap/config.yaml)
    #[arg(short, long, global = true, env = "VCAP_TOOL_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the application descriptor
    App,

    /// List bound service instances
    Services {
        /// Only instances with this name
        #[arg(short, long)]
        name: Option<String>,

        /// Only instances with this label
        #[arg(short, long)]
        label: Option<String>,

        /// Only instances carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Print a single credential value
    Credential {
        /// Service instance name, or service label
        identifier: String,

        /// Credential key
        key: String,
    },
}
