//! Doc header extraction.
//!
//! The doc header is the leading run of comment lines of a file. Blank lines inside the run are
//! skipped; the first non-blank line that is not a comment ends it, and that line plus everything
//! after it is the body. Two directives are recognised inside the header:
//!
//! ```text
//! -- docpath: reports/daily
//! -- tags: reporting, nightly
//! ```
//!
//! The separator after the directive name may be `:`, `=` or a space. A line that starts with a
//! directive name but has no value is dropped. Any other header line is description.

use crate::document::ROOT;
use crate::formats::Format;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const DOCPATH_TOKEN: &str = "docpath";
const DOCPATH_SPLIT_TOKEN: char = '/';
const TAGS_TOKEN: &str = "tags";
const TAGS_SPLIT_TOKEN: char = ',';

static DOCPATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^docpath\s*[:= ]\s*(.+)$").unwrap());
static TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tags\s*[:= ]\s*(.+)$").unwrap());

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Structured content of one file, before it is tied to a location.
pub struct Header {
    /// Free text header lines, comment token and surrounding whitespace removed.
    pub description: Vec<String>,
    /// Segments of the last `docpath` directive, starting with [`ROOT`].
    pub doc_path: Option<Vec<String>>,
    /// Union of all `tags` directives.
    pub tags: BTreeSet<String>,
    /// Lines from the end of the header onward, verbatim.
    pub body: Vec<String>,
}

#[must_use]
/// Splits `text` into its doc header fields and body.
pub fn parse_header<F: Format + ?Sized>(text: &str, format: &F) -> Header {
    let token = format.comment_token();
    let mut header = Header::default();
    let mut in_doc = true;

    for line in text.lines() {
        if in_doc {
            let stripped = line.trim();
            if stripped.is_empty() {
                continue;
            }
            if let Some(comment) = stripped.strip_prefix(token) {
                header.push_comment(comment.trim());
                continue;
            }
            in_doc = false;
        }
        header.body.push(line.to_string());
    }

    header
}

impl Header {
    fn push_comment(&mut self, clean: &str) {
        if clean.starts_with(DOCPATH_TOKEN) {
            if let Some(path) = parse_doc_path(clean) {
                self.doc_path = Some(path);
            }
        } else if clean.starts_with(TAGS_TOKEN) {
            if let Some(tags) = parse_tags(clean) {
                self.tags.extend(tags);
            }
        } else {
            self.description.push(clean.to_string());
        }
    }
}

#[must_use]
/// Parses a `docpath` directive into root-anchored segments.
///
/// Returns `None` when the line is not a well-formed directive.
pub fn parse_doc_path(line: &str) -> Option<Vec<String>> {
    let value = DOCPATH_REGEX.captures(line)?.get(1)?.as_str();
    let mut path = vec![ROOT.to_string()];
    path.extend(
        value
            .split(DOCPATH_SPLIT_TOKEN)
            .map(str::trim)
            .filter(|segment| !segment.is_empty() && *segment != ROOT)
            .map(str::to_string),
    );
    Some(path)
}

#[must_use]
/// Parses a `tags` directive into its set of tag names.
///
/// Returns `None` when the line is not a well-formed directive.
pub fn parse_tags(line: &str) -> Option<BTreeSet<String>> {
    let value = TAGS_REGEX.captures(line)?.get(1)?.as_str();
    Some(
        value
            .split(TAGS_SPLIT_TOKEN)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
#[path = "tests/header.rs"]
mod tests;
