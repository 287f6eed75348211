use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// Reads the current content of each resource for the diff preview.
///
/// Missing or non-UTF-8 files are skipped; their group gets no preview.
pub async fn load_file_contents(paths: &[CompactString]) -> FxHashMap<String, String> {
    let mut contents = FxHashMap::default();
    for path in paths {
        match tokio::fs::read_to_string(path.as_str()).await {
            Ok(text) => {
                contents.insert(path.to_string(), text);
            }
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "preview content unavailable");
            }
        }
    }
    contents
}

#[cfg(test)]
#[path = "../../tests/unit/tree/preview.rs"]
mod tests;
