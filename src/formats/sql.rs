//! SQL format implementation.
//!
//! Doc headers in SQL files are runs of `--` line comments at the top of the file.

use crate::formats::Format;

/// Line comments introduced by `--`, files ending in `.sql`.
pub struct SqlFormat;

impl Format for SqlFormat {
    fn comment_token(&self) -> &'static str {
        "--"
    }

    fn file_extension(&self) -> &'static str {
        ".sql"
    }
}
