pub mod config;
pub mod normalize;
pub mod predict;
pub mod serve;
pub mod show;
pub mod train;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A3S ML Engine - Document sensitivity classification
#[derive(Debug, Parser)]
#[command(name = "a3s-ml-engine", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and ML_ENGINE_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Model artifact to serve (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Train, evaluate and save the sensitivity model
    Train {
        /// JSON file of [{"text": ..., "label": ...}]; the built-in sample set when omitted
        #[arg(long)]
        data: Option<PathBuf>,

        /// Where to write the model artifact (defaults to the configured model path)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Classify one or more texts with a saved model
    Predict {
        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,

        /// Model artifact to use (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Show details about a model artifact
    Show {
        /// Model artifact to inspect (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
}
