//! Mirth Channel Report CLI Application
//!
//! This is the command-line interface for the Mirth channel decoder.
//! It uses the mirth-channel-decoder library and adds:
//! - Recursive discovery of exported channel XML files
//! - Optional TOML configuration
//! - Logging setup
//! - Writing the finished CSV report to stdout

use anyhow::{Context, Result};
use clap::Parser;
use mirth_channel_decoder::Decoder;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod discover;

/// Mirth Channel Report - Summarize exported Mirth channels as CSV
#[derive(Parser, Debug)]
#[command(name = "mirth-channel-cli")]
#[command(about = "Summarize exported Mirth channel XML files as CSV", long_about = None)]
#[command(version)]
struct Args {
    /// Directory to parse exported XML Mirth channel files [default: .]
    #[arg(short = 'd', long = "xml-dir", visible_alias = "xmlDir", value_name = "DIR")]
    xml_dir: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Mirth Channel Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", mirth_channel_decoder::VERSION);

    run(&args)
}

/// Discover exports, build the whole report, then write it in one go.
///
/// Nothing reaches stdout unless every file decoded successfully.
fn run(args: &Args) -> Result<()> {
    let app_config = match &args.config {
        Some(config_path) => {
            log::info!("Loading configuration from: {:?}", config_path);
            config::load_config(config_path)?
        }
        None => config::AppConfig::default(),
    };

    let xml_dir = app_config.resolve_xml_dir(args.xml_dir.as_deref());
    let files = discover::find_channel_files(&xml_dir)?;
    log::info!("Found {} channel export(s) under {:?}", files.len(), xml_dir);

    let decoder = Decoder::with_config(app_config.report);
    let report = decoder
        .build_report(&files)
        .context("Failed to build channel report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.text.as_bytes())
        .context("Failed to write report to stdout")?;
    stdout.flush()?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
