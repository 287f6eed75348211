use compact_str::CompactString;
use rustc_hash::FxHashSet;

use crate::models::Edit;

/// Distinct resource paths touched by `edits`, in first-seen order.
///
/// Edits without a resolvable path (pure file deletions) are skipped.
pub fn extract_group_keys(edits: Option<&[Edit]>) -> Vec<CompactString> {
    let Some(edits) = edits else {
        return Vec::new();
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut keys = Vec::new();
    for edit in edits {
        let Some(path) = edit.resource_path() else {
            continue;
        };
        if seen.insert(path) {
            keys.push(CompactString::from(path));
        }
    }
    keys
}

#[cfg(test)]
#[path = "../../tests/unit/tree/group.rs"]
mod tests;
