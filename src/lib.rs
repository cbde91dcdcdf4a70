//! sqldoc: render the leading comment blocks of SQL files as one cross-linked Markdown document.
//!
//! The pipeline runs in four steps: [`input`] collects and parses every matching file into a
//! [`document::Document`], [`section`] groups the documents by logical path, [`tags`] indexes them
//! by tag, and [`render`] writes both out as Markdown.

pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod header;
pub mod input;
pub mod render;
pub mod section;
pub mod tags;

pub use error::{Error, Result};

use config::Config;
use formats::Format;
use render::Markdown;
use section::Section;
use tracing::{info, warn};

/// Scans `config.src` and renders every matching file into one Markdown string.
///
/// # Errors
///
/// Returns an error if the source tree cannot be walked or a matching file cannot be read.
pub fn generate<F: Format + ?Sized>(config: &Config, format: &F) -> Result<String> {
    let src = input::normalise_src(&config.src);
    let file_extension = config.file_extension_or(format);
    let mut documents =
        input::find_documents(&src, file_extension, config.follow_symlinks, format)?;
    if documents.is_empty() {
        warn!(src = %src, extension = %file_extension, "no matching files found");
    }
    documents.sort_by(|a, b| {
        a.path()
            .cmp(b.path())
            .then_with(|| a.real_path.cmp(&b.real_path))
    });

    let root = Section::organise(&documents);
    let tags = tags::collect_tags(&documents);
    info!(
        documents = documents.len(),
        sections = root.descendant_count(),
        tags = tags.len(),
        "collected documentation"
    );

    let out_depth = render::out_depth(&config.out);
    Ok(Markdown::new(&config.title, &root, &tags, out_depth).to_string())
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
