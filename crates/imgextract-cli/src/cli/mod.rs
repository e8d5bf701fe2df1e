//! CLI for imgextract.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imgextract_core::config::{self, ExtractConfig};
use imgextract_core::extract::ExtractOptions;
use std::path::PathBuf;

use commands::{run_checksum, run_extract, run_inspect};

/// Top-level CLI. Without a subcommand it runs `extract` with the configured
/// defaults.
#[derive(Debug, Parser)]
#[command(name = "imgextract")]
#[command(about = "Extract an embedded base64 PNG from an HTML page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Overrides for the source document and marker.
#[derive(Debug, Default, Args)]
pub struct SourceArgs {
    /// HTML file to read (default from config: pages/mapa-mental.html).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Data URI prefix that starts the payload.
    #[arg(long, value_name = "STR", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub marker: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the image and write it to disk.
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination PNG (default from config: assets/mapa-mental.png).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Locate and decode the image without writing it.
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compute SHA-256 of a file (e.g. the extracted image).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Apply CLI overrides on top of the loaded config.
fn options(cfg: &ExtractConfig, source: SourceArgs, output: Option<PathBuf>) -> ExtractOptions {
    let mut opts = ExtractOptions::from(cfg);
    if let Some(input) = source.input {
        opts.input = input;
    }
    if let Some(marker) = source.marker {
        opts.marker = marker;
    }
    if let Some(output) = output {
        opts.output = output;
    }
    opts
}

fn load_config() -> Result<ExtractConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Extract {
            source: SourceArgs::default(),
            output: None,
        });

        match command {
            CliCommand::Extract { source, output } => {
                run_extract(&options(&load_config()?, source, output))?;
            }
            CliCommand::Inspect { source } => {
                run_inspect(&options(&load_config()?, source, None))?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}
