//! Format trait and implementations for different source languages.
//!
//! This module defines the `Format` trait which abstracts over the source languages whose
//! leading comment blocks we document, by providing the line comment token and the file suffix
//! specific to each language.

pub mod sql;

/// Language-specific lexical details needed to locate a doc header.
pub trait Format {
    /// Prefix marking a line comment, e.g. `--` for SQL.
    fn comment_token(&self) -> &str;
    /// Suffix of files written in this language, including the leading dot.
    fn file_extension(&self) -> &str;
}
