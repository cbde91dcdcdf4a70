use super::{anchor, Document};
use crate::formats::sql::SqlFormat;
use crate::header::parse_header;

fn segments(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_physical_path_is_fallback() {
    let header = parse_header("-- plain prose\nSELECT 1;", &SqlFormat);
    let doc = Document::new(
        "./reports/daily.sql",
        segments(&[".", "reports", "daily.sql"]),
        header,
    );

    assert_eq!(doc.name, "daily.sql");
    assert!(doc.doc_path.is_none());
    assert_eq!(doc.path(), segments(&["reports", "daily.sql"]).as_slice());
    assert_eq!(doc.section_keys(), segments(&["reports"]).as_slice());
}

#[test]
fn test_doc_path_gets_name_appended() {
    let header = parse_header("-- hello\n-- docpath: x/y\n", &SqlFormat);
    let doc = Document::new("./pkg/a.sql", segments(&[".", "pkg", "a.sql"]), header);

    assert_eq!(doc.doc_path, Some(segments(&[".", "x", "y", "a.sql"])));
    assert_eq!(doc.path(), segments(&["x", "y", "a.sql"]).as_slice());
    assert_eq!(doc.section_keys(), segments(&["x", "y"]).as_slice());
    assert_eq!(
        doc.file_path,
        segments(&[".", "pkg", "a.sql"]),
        "Physical path is kept alongside the logical one"
    );
}

#[test]
fn test_root_level_file_has_no_section_keys() {
    let header = parse_header("SELECT 1;", &SqlFormat);
    let doc = Document::new("./a.sql", segments(&[".", "a.sql"]), header);

    assert_eq!(doc.path(), segments(&["a.sql"]).as_slice());
    assert!(doc.section_keys().is_empty());
}

#[test]
fn test_link_follows_real_path_not_doc_path() {
    let a = Document::new(
        "./one/a.sql",
        segments(&[".", "one", "a.sql"]),
        parse_header("-- docpath: shared\n", &SqlFormat),
    );
    let b = Document::new(
        "./two/a.sql",
        segments(&[".", "two", "a.sql"]),
        parse_header("-- docpath: shared\n", &SqlFormat),
    );

    assert_eq!(a.path(), b.path(), "Both land on the same logical path");
    assert_ne!(a.link, b.link, "Anchors must still differ");
    assert_eq!(a.link, anchor("./one/a.sql"));
}

#[test]
fn test_anchor_is_stable_and_url_safe() {
    let path = "./some dir/with+odd?chars/~file.sql";

    assert_eq!(anchor(path), anchor(path));
    assert!(
        anchor(path)
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')),
        "Anchor should only use URL-safe characters: {}",
        anchor(path)
    );
}
