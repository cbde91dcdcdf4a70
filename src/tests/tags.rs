use super::{collect_tags, tag_anchor};
use crate::document::Document;
use crate::formats::sql::SqlFormat;
use crate::header::parse_header;

fn doc(real_path: &str, text: &str) -> Document {
    let mut file_path = vec![".".to_string()];
    file_path.extend(real_path.split('/').map(str::to_string));
    Document::new(
        &format!("./{real_path}"),
        file_path,
        parse_header(text, &SqlFormat),
    )
}

#[test]
fn test_document_listed_under_each_tag() {
    let documents = vec![doc("reports/daily.sql", "-- tags: reporting, nightly\n")];

    let tags = collect_tags(&documents);

    let keys: Vec<&str> = tags.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["nightly", "reporting"]);
    for tag in tags.values() {
        assert_eq!(tag.documents.len(), 1);
        assert_eq!(tag.documents[0].name, "daily.sql");
    }
}

#[test]
fn test_untagged_documents_are_absent() {
    let documents = vec![doc("a.sql", "-- just prose\n"), doc("b.sql", "")];

    assert!(collect_tags(&documents).is_empty());
}

#[test]
fn test_tag_documents_sorted_by_real_path() {
    let documents = vec![
        doc("zz/last.sql", "-- tags: shared\n"),
        doc("aa/first.sql", "-- tags: shared, other\n"),
        doc("mm/middle.sql", "-- tags: shared\n"),
    ];

    let tags = collect_tags(&documents);

    let shared: Vec<&str> = tags["shared"]
        .documents
        .iter()
        .map(|d| d.real_path.as_str())
        .collect();
    assert_eq!(
        shared,
        vec!["./aa/first.sql", "./mm/middle.sql", "./zz/last.sql"]
    );
    assert_eq!(tags["other"].documents.len(), 1);
}

#[test]
fn test_every_listed_document_carries_its_tag() {
    let documents = vec![
        doc("a.sql", "-- tags: x, y\n"),
        doc("b.sql", "-- tags: y\n-- tags: z\n"),
        doc("c.sql", "-- tags: z\n"),
    ];

    let tags = collect_tags(&documents);

    for (name, tag) in &tags {
        assert_eq!(&tag.name, name);
        for document in &tag.documents {
            assert!(document.tags.contains(name));
        }
    }
    for document in &documents {
        for name in &document.tags {
            assert!(tags.contains_key(name), "Tag {name} missing from index");
        }
    }
}

#[test]
fn test_tag_anchor() {
    assert_eq!(tag_anchor("nightly"), "TAGnightly");
}
