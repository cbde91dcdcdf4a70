//! Discovery of documentable files below a scan root.
//!
//! Hidden directories are pruned as a whole, hidden files and (unless followed) symbolic links
//! are skipped, and anything not ending in the configured suffix is ignored without comment.
//! Every remaining file is read and parsed into a [`Document`].

use crate::document::{Document, ROOT};
use crate::error::{Error, Result};
use crate::formats::Format;
use crate::header::parse_header;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[must_use]
/// Whether a file or directory name marks it as hidden.
///
/// Names of one or two characters (`.`, `..`) never count as hidden.
pub fn is_hidden(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.chars().count() > 2 && name.starts_with('.')
}

#[must_use]
/// Anchors a relative scan root at the working directory, so `db` becomes `./db`.
///
/// Absolute roots and roots already starting with `.` are returned unchanged.
pub fn normalise_src(src: &str) -> String {
    if src.starts_with(ROOT) || Path::new(src).is_absolute() {
        src.to_string()
    } else {
        format!("{ROOT}/{src}")
    }
}

/// Collects a [`Document`] for every matching file below `src`.
///
/// Traversal order is unspecified; callers sort the result.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed, a followed symlink is broken, or a
/// matching file cannot be read as UTF-8 text.
pub fn find_documents<F: Format + ?Sized>(
    src: &str,
    file_extension: &str,
    follow_symlinks: bool,
    format: &F,
) -> Result<Vec<Document>> {
    let walker = WalkDir::new(src)
        .follow_links(follow_symlinks)
        .into_iter()
        .filter_entry(|entry| keep_entry(entry, follow_symlinks));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(file_extension) {
            continue;
        }
        documents.push(load_document(src, entry.path(), format)?);
    }

    Ok(documents)
}

/// The scan root itself is always kept, even when its name looks hidden.
fn keep_entry(entry: &DirEntry, follow_symlinks: bool) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if is_hidden(entry.file_name()) {
        debug!(path = %entry.path().display(), "skipping hidden entry");
        return false;
    }
    if !follow_symlinks && entry.path_is_symlink() {
        debug!(path = %entry.path().display(), "skipping symlink");
        return false;
    }
    true
}

/// Reads and parses the file at `path`, found below the scan root `src`.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read as UTF-8 text.
pub fn load_document<F: Format + ?Sized>(src: &str, path: &Path, format: &F) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let header = parse_header(&text, format);
    debug!(
        path = %path.display(),
        description_lines = header.description.len(),
        tags = header.tags.len(),
        has_docpath = header.doc_path.is_some(),
        "parsed doc header"
    );

    Ok(Document::new(
        &path.to_string_lossy(),
        physical_path(src, path),
        header,
    ))
}

/// Root-anchored segments of `path` relative to `src`.
fn physical_path(src: &str, path: &Path) -> Vec<String> {
    let relative = path.strip_prefix(src).unwrap_or(path);
    let mut segments: Vec<String> = relative
        .iter()
        .map(|segment| segment.to_string_lossy().into_owned())
        .collect();
    if segments.first().map(String::as_str) != Some(ROOT) {
        segments.insert(0, ROOT.to_string());
    }
    segments
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
