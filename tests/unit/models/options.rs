use super::*;
use std::io::Write;

#[test]
fn test_default_options() {
    let options = TreeOptions::default();
    assert!(!options.preserve_group_state);
    assert!(options.expand_new_groups);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let options = TreeOptions::from_json_str(r#"{"preserveGroupState": true}"#).unwrap();
    assert!(options.preserve_group_state);
    assert!(options.expand_new_groups);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = TreeOptions::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"expandNewGroups": false}}"#).unwrap();

    let options = TreeOptions::load(file.path()).unwrap();
    assert!(!options.expand_new_groups);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TreeOptions::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
