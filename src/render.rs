//! Markdown rendering of the section tree and tag index.
//!
//! The output is one document: a title, a nested index of sections, every section with its
//! documents in pre-order, and finally the tag index. Sections, documents and tags are all
//! addressed through named anchors so the index, the per-document tag lists and the tag index
//! can link to each other. Link targets are percent-encoded per path segment, so names with
//! spaces still produce valid links.
//!
//! Top-level sections are rendered as `##`, a level above the `###` the Python sql-doc tool
//! used, so they sit beside the `## Tags` index.

use crate::document::Document;
use crate::section::{Section, ROOT_ANCHOR};
use crate::tags::{tag_anchor, Tag};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};

/// Anchor of the tag index.
pub const TAGS_ANCHOR: &str = "TAGS_SECTION";
/// Deepest heading level Markdown supports.
pub const MAX_HEADER_LEVEL: usize = 6;
/// One directory level up.
const PARENT: &str = "../";

/// Renders a section tree and tag index when formatted with `{}`.
pub struct Markdown<'a> {
    title: &'a str,
    root: &'a Section<'a>,
    tags: &'a BTreeMap<String, Tag<'a>>,
    out_depth: usize,
}

impl<'a> Markdown<'a> {
    #[must_use]
    /// Prepares a rendering; `out_depth` is the result of [`out_depth`] for the run.
    pub fn new(
        title: &'a str,
        root: &'a Section<'a>,
        tags: &'a BTreeMap<String, Tag<'a>>,
        out_depth: usize,
    ) -> Self {
        Self {
            title,
            root,
            tags,
            out_depth,
        }
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, section: &Section<'_>) -> fmt::Result {
        writeln!(f, "<a name=\"{}\"></a>", section.anchor())?;
        if section.depth() > 0 {
            writeln!(
                f,
                "{} {}",
                "#".repeat(header_level(section.depth())),
                section.name()
            )?;
        }
        for document in &section.documents {
            self.write_document(f, document)?;
            writeln!(f)?;
        }
        for child in &section.children {
            self.write_section(f, child)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_document(&self, f: &mut fmt::Formatter<'_>, document: &Document) -> fmt::Result {
        writeln!(f, "<a name=\"{}\"></a>", document.link)?;
        writeln!(f, "{} {}", "#".repeat(MAX_HEADER_LEVEL), document.name)?;
        write!(
            f,
            "_[source]({})_",
            source_link(&document.real_path, self.out_depth)
        )?;
        for line in &document.description {
            write!(f, "  \n{line}")?;
        }
        if document.description.is_empty() {
            write!(f, "\n\n_undocumented_")?;
        }
        if !document.tags.is_empty() {
            write!(f, "\n\ntags:")?;
            for tag in &document.tags {
                write!(f, " [{tag}](#{})", fragment(&tag_anchor(tag)))?;
            }
        }
        if !document.body.is_empty() {
            write!(f, "\n\n")?;
            for line in &document.body {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }

    fn write_tags(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<a name=\"{TAGS_ANCHOR}\"></a>")?;
        writeln!(f, "## Tags")?;
        for tag in self.tags.values() {
            writeln!(f, "<a name=\"{}\"></a>", tag.anchor())?;
            writeln!(f, "### {}", tag.name)?;
            for document in &tag.documents {
                writeln!(f, "- [{}](#{})", document.name, document.link)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        if !self.root.documents.is_empty() {
            writeln!(f, "- [Root](#{})", fragment(ROOT_ANCHOR))?;
        }
        write_index(f, self.root, 0)?;
        if !self.tags.is_empty() {
            writeln!(f, "- [Tags](#{TAGS_ANCHOR})")?;
        }
        writeln!(f)?;

        self.write_section(f, self.root)?;

        if !self.tags.is_empty() {
            self.write_tags(f)?;
        }
        Ok(())
    }
}

fn write_index(f: &mut fmt::Formatter<'_>, section: &Section<'_>, level: usize) -> fmt::Result {
    for child in &section.children {
        writeln!(
            f,
            "{:indent$}- [{}](#{})",
            "",
            child.name(),
            fragment(&child.anchor()),
            indent = level * 2
        )?;
        write_index(f, child, level + 1)?;
    }
    Ok(())
}

#[must_use]
/// Heading level of a section at `depth`; top-level sections get `##`.
pub fn header_level(depth: usize) -> usize {
    (depth + 1).min(MAX_HEADER_LEVEL)
}

#[must_use]
/// Number of directory levels between the working directory and the directory of `out`.
///
/// Source paths are relative to the working directory, so this is the climb a link in `out`
/// needs to reach them. `.` segments do not count and `..` segments cancel one level.
pub fn out_depth(out: &str) -> usize {
    let Some(dir) = Path::new(out).parent() else {
        return 0;
    };
    dir.components().fold(0, |depth, component| match component {
        Component::Normal(_) => depth + 1,
        Component::ParentDir => depth.saturating_sub(1),
        _ => depth,
    })
}

/// Percent-encodes an anchor for use after `#`, keeping `/` between segments readable.
fn fragment(anchor: &str) -> String {
    anchor
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[must_use]
/// Link to a source file as seen from an output file `out_depth` levels away.
///
/// Relative paths are anchored with `./` before climbing, so `reports/a.sql` one level away
/// becomes `./../reports/a.sql`. Absolute paths are returned unchanged.
pub fn source_link(real_path: &str, out_depth: usize) -> String {
    if real_path.starts_with('/') {
        return real_path.to_string();
    }
    let relative = real_path.strip_prefix("./").unwrap_or(real_path);
    format!("./{}{relative}", PARENT.repeat(out_depth))
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
