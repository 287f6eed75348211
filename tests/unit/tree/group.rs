use super::*;
use crate::models::{EditRange, FileEditOptions};

fn text(path: &str) -> Edit {
    Edit::text(path, EditRange::default(), "x")
}

#[test]
fn test_absent_or_empty_input_yields_no_keys() {
    assert!(extract_group_keys(None).is_empty());
    assert!(extract_group_keys(Some(&[][..])).is_empty());
}

#[test]
fn test_keys_are_distinct_in_first_seen_order() {
    let edits = vec![text("/a"), text("/b"), text("/a"), text("/c")];
    let keys = extract_group_keys(Some(edits.as_slice()));
    assert_eq!(keys, vec!["/a", "/b", "/c"]);
}

#[test]
fn test_file_edits_group_by_new_resource() {
    let edits = vec![
        Edit::rename_file("/old", "/new", FileEditOptions::default()),
        text("/new"),
        Edit::create_file("/created", FileEditOptions::default()),
    ];
    let keys = extract_group_keys(Some(edits.as_slice()));
    assert_eq!(keys, vec!["/new", "/created"]);
}

#[test]
fn test_deletions_are_skipped() {
    let edits = vec![
        Edit::delete_file("/gone", FileEditOptions::default()),
        text("/kept"),
        Edit::delete_file("/kept", FileEditOptions::default()),
    ];
    let keys = extract_group_keys(Some(edits.as_slice()));
    assert_eq!(keys, vec!["/kept"]);
}
