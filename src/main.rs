//! sqldoc: render SQL doc headers into a single Markdown document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use sqldoc::config::Config;
use sqldoc::formats::sql::SqlFormat;
use sqldoc::{generate, Error};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqldoc")]
#[command(
    about = "Render the doc headers of SQL files into one Markdown document",
    long_about = None
)]
struct Args {
    /// Path to sources root
    #[arg(long, value_name = "PATH")]
    src: Option<String>,

    /// SQL file extension
    #[arg(long = "file_extension", value_name = "EXT")]
    file_extension: Option<String>,

    /// Output file; if left empty, writes to stdout. Also used to compute source links
    #[arg(long, value_name = "PATH")]
    out: Option<String>,

    /// Follow symbolic links while scanning
    #[arg(long = "follow_symlinks")]
    follow_symlinks: bool,

    /// Title of the rendered document
    #[arg(long)]
    title: Option<String>,

    /// Configuration file to load instead of sqldoc.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override config with command line args
    if let Some(src) = args.src {
        cfg.src = src;
    }
    if let Some(file_extension) = args.file_extension {
        cfg.file_extension = file_extension;
    }
    if let Some(out) = args.out {
        cfg.out = out;
    }
    if args.follow_symlinks {
        cfg.follow_symlinks = true;
    }
    if let Some(title) = args.title {
        cfg.title = title;
    }

    let md = generate(&cfg, &SqlFormat)?;

    if cfg.out.is_empty() {
        println!("{md}");
    } else {
        fs::write(&cfg.out, md).map_err(|source| Error::Write {
            path: PathBuf::from(&cfg.out),
            source,
        })?;
        info!(out = %cfg.out, "wrote documentation");
    }

    Ok(())
}
