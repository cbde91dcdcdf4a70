//! Document representation for parsed source files.
//!
//! A document is one source file split into its doc header (description, logical path and
//! tags) and the code that follows it. Documents are created once during collection and are
//! read-only afterwards; the hierarchy and tag index only ever borrow them.

use crate::header::Header;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use std::collections::BTreeSet;

/// Path segment standing for the scan root at the start of every path.
pub const ROOT: &str = ".";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One documented source file with the paths used to place and link it.
pub struct Document {
    /// Base file name, the last segment of both paths.
    pub name: String,
    /// Path of the file on disk as found during the scan, used for source links.
    pub real_path: String,
    /// Segments from the scan root to the file, starting with [`ROOT`].
    pub file_path: Vec<String>,
    /// Segments declared by a `docpath` directive, starting with [`ROOT`] and ending in `name`.
    pub doc_path: Option<Vec<String>>,
    /// Free text lines of the doc header in file order.
    pub description: Vec<String>,
    /// Tags declared by `tags` directives.
    pub tags: BTreeSet<String>,
    /// Lines following the doc header, verbatim.
    pub body: Vec<String>,
    /// Anchor token derived from `real_path`.
    pub link: String,
}

impl Document {
    #[must_use]
    /// Assembles a document from its location and its parsed header.
    pub fn new(real_path: &str, file_path: Vec<String>, header: Header) -> Self {
        let name = file_path.last().cloned().unwrap_or_default();
        let doc_path = header.doc_path.map(|mut segments| {
            segments.push(name.clone());
            segments
        });
        Self {
            link: anchor(real_path),
            real_path: real_path.to_string(),
            name,
            file_path,
            doc_path,
            description: header.description,
            tags: header.tags,
            body: header.body,
        }
    }

    #[must_use]
    /// Logical path below the root: the `docpath` segments if declared, else the file path.
    ///
    /// The leading [`ROOT`] segment is dropped; the last segment is the document name.
    pub fn path(&self) -> &[String] {
        let full = self.doc_path.as_ref().unwrap_or(&self.file_path);
        full.get(1..).unwrap_or_default()
    }

    #[must_use]
    /// Segments naming the sections this document is nested in, outermost first.
    pub fn section_keys(&self) -> &[String] {
        let path = self.path();
        &path[..path.len().saturating_sub(1)]
    }
}

#[must_use]
/// Stable, URL-safe anchor token for a file path.
///
/// Two different paths never share a token and the same path always yields the same one.
pub fn anchor(real_path: &str) -> String {
    URL_SAFE.encode(real_path.as_bytes())
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
