use schema_fields::path::{FieldPath, Segment, resolve_cell_path};

#[test]
fn test_parse_mixes_keys_and_indices() {
    let path = FieldPath::parse("users.0.name");
    assert_eq!(
        path.segments(),
        &[
            Segment::Key("users".to_string()),
            Segment::Index(0),
            Segment::Key("name".to_string()),
        ]
    );
    assert_eq!(path.to_string(), "users.0.name");
}

#[test]
fn test_parse_empty_is_root() {
    assert!(FieldPath::parse("").is_root());
    assert_eq!(FieldPath::root().to_string(), "");
}

#[test]
fn test_cell_path_with_key() {
    let base = FieldPath::parse("users");
    assert_eq!(resolve_cell_path(&base, 2, Some("email")).to_string(), "users.2.email");
}

#[test]
fn test_cell_path_without_key_is_row_path() {
    let base = FieldPath::parse("tags");
    assert_eq!(resolve_cell_path(&base, 1, None).to_string(), "tags.1");
}

#[test]
fn test_cell_paths_unique_per_row() {
    let base = FieldPath::parse("users");
    let a = resolve_cell_path(&base, 0, Some("name"));
    let b = resolve_cell_path(&base, 1, Some("name"));
    assert_ne!(a, b);
}

#[test]
fn test_cell_path_follows_row_position() {
    let base = FieldPath::parse("users");
    let before = resolve_cell_path(&base, 3, Some("name"));
    let after = resolve_cell_path(&base, 1, Some("name"));
    assert_ne!(before, after);
    assert!(after.starts_with(&base));
}

#[test]
fn test_parent_and_last() {
    let path = FieldPath::parse("a.b.3");
    assert_eq!(path.last(), Some(&Segment::Index(3)));
    assert_eq!(path.parent(), Some(FieldPath::parse("a.b")));
    assert_eq!(FieldPath::root().parent(), None);
}

#[test]
fn test_from_segments_allows_dotted_keys() {
    let path = FieldPath::from_segments(vec![
        Segment::Key("users".to_string()),
        Segment::Index(2),
    ]);
    assert_eq!(path, FieldPath::parse("users.2"));

    let dotted = FieldPath::from_segments(vec![Segment::Key("a.b".to_string())]);
    assert_eq!(dotted.segments().len(), 1);
    assert_ne!(dotted, FieldPath::parse("a.b"));
}
