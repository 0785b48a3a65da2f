//! Command-line entry point: generate a dummy fastLM model file.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fastlm_export::{export_model, resolve_config, ConfigOverrides, ExportConfig};

/// fastlm-export — write a random single-block transformer model file
#[derive(Parser)]
#[command(name = "fastlm-export", version)]
struct Cli {
    /// JSON file with export settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of layers recorded in the header.
    #[arg(short, long)]
    layers: Option<i32>,

    /// Hidden dimension of each projection matrix.
    #[arg(short, long)]
    d_model: Option<i32>,

    /// Output file (parent directory must exist).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed for reproducible weights.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve(self) -> fastlm_export::Result<ExportConfig> {
        let overrides = ConfigOverrides {
            layers: self.layers,
            d_model: self.d_model,
            output: self.output,
            seed: self.seed,
        };
        resolve_config(self.config.as_deref(), overrides)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("Creating dummy model file: {}...", config.output.display());
    match export_model(&config) {
        Ok(summary) => {
            println!(
                "Model saved successfully! ({} bytes, layers={}, d_model={})",
                summary.bytes_written, summary.layers, summary.d_model
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
