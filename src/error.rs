//! Failures that abort a documentation run.
//!
//! A partially scanned tree is worse than no output, so every variant here is
//! fatal: the pipeline stops and `main` reports the diagnostic.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong between scanning the source tree and writing Markdown.
pub enum Error {
    /// A candidate source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to open or decode.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A directory entry could not be listed, or a followed symlink is broken.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    /// The rendered document could not be written to its destination.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output file requested with `--out`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration file exists but is not valid TOML for [`crate::config::Config`].
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
