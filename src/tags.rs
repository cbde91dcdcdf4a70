//! Tag index: which documents carry which tag.

use crate::document::Document;
use std::collections::BTreeMap;

/// Prefix of a tag's anchor, followed by the tag name.
pub const TAG_LINK_PREFIX: &str = "TAG";

#[derive(Clone, Debug)]
/// A tag with every document declaring it.
pub struct Tag<'a> {
    /// Tag name as written in the `tags` directive, trimmed.
    pub name: String,
    /// Documents carrying the tag, sorted by real path.
    pub documents: Vec<&'a Document>,
}

impl Tag<'_> {
    #[must_use]
    /// Fragment identifier used to link to this tag's entry.
    pub fn anchor(&self) -> String {
        tag_anchor(&self.name)
    }
}

#[must_use]
/// Fragment identifier for the tag called `name`.
pub fn tag_anchor(name: &str) -> String {
    format!("{TAG_LINK_PREFIX}{name}")
}

#[must_use]
/// Builds the tag index, keyed and ordered by tag name.
pub fn collect_tags(documents: &[Document]) -> BTreeMap<String, Tag<'_>> {
    let mut tags: BTreeMap<String, Tag<'_>> = BTreeMap::new();
    for document in documents {
        for name in &document.tags {
            tags.entry(name.clone())
                .or_insert_with(|| Tag {
                    name: name.clone(),
                    documents: Vec::new(),
                })
                .documents
                .push(document);
        }
    }
    for tag in tags.values_mut() {
        tag.documents
            .sort_by(|a, b| a.real_path.cmp(&b.real_path));
    }
    tags
}

#[cfg(test)]
#[path = "tests/tags.rs"]
mod tests;
