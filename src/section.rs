//! Section tree built from the logical paths of documents.
//!
//! A section is a node in the rendered hierarchy. Documents whose logical path ends at a node are
//! held directly by it; documents that continue deeper are grouped by their next path segment
//! into child sections. Which path a document contributes (declared `docpath` or physical
//! location) makes no difference to the grouping.

use crate::document::Document;
use std::collections::BTreeMap;

/// Anchor of the root section.
pub const ROOT_ANCHOR: &str = "ROOT";

#[derive(Clone, Debug, Default)]
/// Hierarchical grouping of documents sharing a logical path prefix.
pub struct Section<'a> {
    /// Segments consumed to reach this section; empty for the root.
    pub path: Vec<String>,
    /// Documents whose logical path ends at this section, in input order.
    pub documents: Vec<&'a Document>,
    /// Nested sections, sorted by name.
    pub children: Vec<Section<'a>>,
}

impl<'a> Section<'a> {
    #[must_use]
    /// Groups documents, already sorted by logical path, into a tree rooted at depth 0.
    pub fn organise(sorted_documents: &'a [Document]) -> Self {
        organise_at(sorted_documents.iter().collect(), Vec::new())
    }

    #[must_use]
    /// Last path segment, or an empty string for the root.
    pub fn name(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    #[must_use]
    /// Nesting depth, 0 for the root.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    /// Fragment identifier used to link to this section.
    pub fn anchor(&self) -> String {
        if self.path.is_empty() {
            ROOT_ANCHOR.to_string()
        } else {
            self.path.join("/")
        }
    }

    #[cfg(test)]
    /// Every document in this section and below, in pre-order.
    pub fn all_documents(&self) -> Vec<&'a Document> {
        let mut documents = self.documents.clone();
        for child in &self.children {
            documents.extend(child.all_documents());
        }
        documents
    }

    #[must_use]
    /// Number of sections in this subtree, excluding this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

fn organise_at<'a>(documents: Vec<&'a Document>, path: Vec<String>) -> Section<'a> {
    let level = path.len();
    let mut direct = Vec::new();
    let mut grouped: BTreeMap<&'a str, Vec<&'a Document>> = BTreeMap::new();

    for document in documents {
        match document.section_keys().get(level) {
            Some(key) => grouped.entry(key.as_str()).or_default().push(document),
            None => direct.push(document),
        }
    }

    let children = grouped
        .into_iter()
        .map(|(key, members)| {
            let mut child_path = path.clone();
            child_path.push(key.to_string());
            organise_at(members, child_path)
        })
        .collect();

    Section {
        path,
        documents: direct,
        children,
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
