//! Configuration to acknowledge project preferences as well as set defaults.
//!
//! We look for an sqldoc.toml, and if present we load settings from there. Command line flags
//! override individual fields afterwards.

use crate::error::{Error, Result};
use crate::formats::Format;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File consulted by [`Config::load`].
pub const CONFIG_FILE: &str = "sqldoc.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Run settings loaded from sqldoc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = ".".to_string())]
    /// Root directory to scan for source files.
    pub src: String,
    #[facet(default = String::new())]
    /// Suffix a file name must end with to be documented; empty uses the format's extension.
    pub file_extension: String,
    #[facet(default = String::new())]
    /// Output file; empty writes the document to stdout.
    pub out: String,
    #[facet(default = false)]
    /// Follow symbolic links while scanning instead of skipping them.
    pub follow_symlinks: bool,
    #[facet(default = "Query Documentation".to_string())]
    /// Level one heading at the top of the rendered document.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src: ".".to_string(),
            file_extension: String::new(),
            out: String::new(),
            follow_symlinks: false,
            title: "Query Documentation".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Suffix to scan for: the configured one, or `format`'s when none is configured.
    pub fn file_extension_or<'a, F: Format + ?Sized>(&'a self, format: &'a F) -> &'a str {
        if self.file_extension.is_empty() {
            format.file_extension()
        } else {
            &self.file_extension
        }
    }

    /// Load configuration from sqldoc.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(Error::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
