use super::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn test_reads_existing_files_and_skips_missing() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.rs");
    std::fs::write(&a, "fn main() {}\n").unwrap();
    let b = dir.path().join("b.rs");

    let a = CompactString::from(&*a.to_string_lossy());
    let b = CompactString::from(&*b.to_string_lossy());
    let contents = runtime().block_on(load_file_contents(&[a.clone(), b.clone()]));

    assert_eq!(contents.len(), 1);
    assert_eq!(contents.get(a.as_str()).map(String::as_str), Some("fn main() {}\n"));
    assert!(!contents.contains_key(b.as_str()));
}

#[test]
fn test_empty_path_list() {
    let contents = runtime().block_on(load_file_contents(&[]));
    assert!(contents.is_empty());
}
