use super::*;
use serde_json::json;

fn workspace_edit(value: serde_json::Value) -> lsp_types::WorkspaceEdit {
    serde_json::from_value(value).unwrap()
}

fn range(line: u32, start: u32, end: u32) -> serde_json::Value {
    json!({
        "start": {"line": line, "character": start},
        "end": {"line": line, "character": end}
    })
}

#[test]
fn test_document_changes_keep_server_order() {
    let edit = workspace_edit(json!({
        "documentChanges": [
            {
                "textDocument": {"uri": "file:///src/a.rs", "version": 4},
                "edits": [
                    {"range": range(1, 0, 3), "newText": "foo"},
                    {"range": range(7, 2, 5), "newText": "bar"}
                ]
            },
            {"kind": "create", "uri": "file:///src/new.rs", "options": {"overwrite": true}},
            {"kind": "rename", "oldUri": "file:///src/old.rs", "newUri": "file:///src/moved.rs"},
            {"kind": "delete", "uri": "file:///src/gone.rs", "options": {"recursive": true}}
        ]
    }));

    let edits = edits_from_workspace_edit(edit);

    assert_eq!(edits.len(), 5);
    assert_eq!(
        edits[0],
        Edit::Text(TextEdit {
            resource: "/src/a.rs".to_string(),
            range: EditRange::new(1, 0, 1, 3),
            new_text: "foo".to_string(),
            version: Some(4),
        })
    );
    assert_eq!(edits[1].resource_path(), Some("/src/a.rs"));
    assert_eq!(
        edits[2],
        Edit::create_file(
            "/src/new.rs",
            FileEditOptions {
                overwrite: true,
                ..FileEditOptions::default()
            }
        )
    );
    assert_eq!(
        edits[3],
        Edit::rename_file("/src/old.rs", "/src/moved.rs", FileEditOptions::default())
    );
    assert_eq!(
        edits[4],
        Edit::delete_file(
            "/src/gone.rs",
            FileEditOptions {
                recursive: true,
                ..FileEditOptions::default()
            }
        )
    );
}

#[test]
fn test_plain_document_edits() {
    let edit = workspace_edit(json!({
        "documentChanges": [
            {
                "textDocument": {"uri": "file:///b.rs", "version": null},
                "edits": [{"range": range(0, 0, 1), "newText": "x"}]
            }
        ]
    }));

    let edits = edits_from_workspace_edit(edit);
    assert_eq!(edits.len(), 1);
    match &edits[0] {
        Edit::Text(text) => {
            assert_eq!(text.resource, "/b.rs");
            assert_eq!(text.version, None);
        }
        Edit::File(_) => panic!("expected text edit"),
    }
}

#[test]
fn test_changes_map_is_sorted_by_uri() {
    let edit = workspace_edit(json!({
        "changes": {
            "file:///z.rs": [{"range": range(0, 0, 1), "newText": "z"}],
            "file:///a.rs": [
                {"range": range(0, 0, 1), "newText": "a0"},
                {"range": range(2, 0, 1), "newText": "a1"}
            ]
        }
    }));

    let edits = edits_from_workspace_edit(edit);
    let paths: Vec<Option<&str>> = edits.iter().map(Edit::resource_path).collect();
    assert_eq!(paths, vec![Some("/a.rs"), Some("/a.rs"), Some("/z.rs")]);
}

#[test]
fn test_empty_workspace_edit() {
    let edits = edits_from_workspace_edit(lsp_types::WorkspaceEdit::default());
    assert!(edits.is_empty());
}

#[test]
fn test_file_uri_is_percent_decoded_and_preview_loads() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("my file.rs");
    std::fs::write(&file, "fn spaced() {}\n").unwrap();
    let uri = lsp_types::Url::from_file_path(&file).unwrap();
    assert!(uri.as_str().contains("%20"));

    let edit = workspace_edit(json!({
        "documentChanges": [
            {
                "textDocument": {"uri": uri.as_str(), "version": 1},
                "edits": [{"range": range(0, 3, 9), "newText": "renamed"}]
            }
        ]
    }));
    let edits = edits_from_workspace_edit(edit);

    let expected = file.to_string_lossy().to_string();
    assert_eq!(edits[0].resource_path(), Some(expected.as_str()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let mut tree = crate::tree::BulkEditTree::new();
    runtime.block_on(tree.init_tree_from_disk(&edits));

    let group = tree.groups().next().unwrap();
    assert_eq!(group.id, expected.as_str());
    assert_eq!(group.file_contents.as_deref(), Some("fn spaced() {}\n"));
}

#[test]
fn test_non_file_uri_keeps_decoded_path() {
    let edit = workspace_edit(json!({
        "documentChanges": [
            {"kind": "create", "uri": "untitled:/my%20notes.txt"}
        ]
    }));

    let edits = edits_from_workspace_edit(edit);
    assert_eq!(edits[0].resource_path(), Some("/my notes.txt"));
}
