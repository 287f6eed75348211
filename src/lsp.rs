//! Flattens LSP workspace edits into the edit list the preview tree consumes.

use crate::models::{Edit, EditPosition, EditRange, FileEdit, FileEditOptions, TextEdit};

/// Order follows `document_changes` as sent by the server. The legacy
/// `changes` map has no order of its own, so it is emitted sorted by URI.
pub fn edits_from_workspace_edit(edit: lsp_types::WorkspaceEdit) -> Vec<Edit> {
    let mut out = Vec::new();

    if let Some(changes) = edit.changes {
        let mut changes: Vec<_> = changes.into_iter().collect();
        changes.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        for (uri, edits) in changes {
            let path = resource_path(&uri);
            for edit in edits {
                out.push(text_edit_from_lsp(&path, edit, None));
            }
        }
    }

    if let Some(doc_changes) = edit.document_changes {
        match doc_changes {
            lsp_types::DocumentChanges::Edits(edits) => {
                for doc in edits {
                    push_text_document_edit(&mut out, doc);
                }
            }
            lsp_types::DocumentChanges::Operations(ops) => {
                for op in ops {
                    match op {
                        lsp_types::DocumentChangeOperation::Edit(doc) => {
                            push_text_document_edit(&mut out, doc);
                        }
                        lsp_types::DocumentChangeOperation::Op(op) => {
                            out.push(file_edit_from_lsp(op));
                        }
                    }
                }
            }
        }
    }

    out
}

fn push_text_document_edit(out: &mut Vec<Edit>, doc: lsp_types::TextDocumentEdit) {
    let path = resource_path(&doc.text_document.uri);
    let version = doc.text_document.version;
    for edit in doc.edits {
        let edit = match edit {
            lsp_types::OneOf::Left(edit) => edit,
            lsp_types::OneOf::Right(edit) => edit.text_edit,
        };
        out.push(text_edit_from_lsp(&path, edit, version));
    }
}

fn text_edit_from_lsp(path: &str, edit: lsp_types::TextEdit, version: Option<i32>) -> Edit {
    Edit::Text(TextEdit {
        resource: path.to_string(),
        range: range_from_lsp(edit.range),
        new_text: edit.new_text,
        version,
    })
}

fn file_edit_from_lsp(op: lsp_types::ResourceOp) -> Edit {
    match op {
        lsp_types::ResourceOp::Create(create) => {
            let options = create.options.as_ref();
            Edit::File(FileEdit {
                old_resource: None,
                new_resource: Some(resource_path(&create.uri)),
                options: FileEditOptions {
                    overwrite: options.and_then(|o| o.overwrite).unwrap_or(false),
                    ignore_if_exists: options.and_then(|o| o.ignore_if_exists).unwrap_or(false),
                    ..FileEditOptions::default()
                },
            })
        }
        lsp_types::ResourceOp::Rename(rename) => {
            let options = rename.options.as_ref();
            Edit::File(FileEdit {
                old_resource: Some(resource_path(&rename.old_uri)),
                new_resource: Some(resource_path(&rename.new_uri)),
                options: FileEditOptions {
                    overwrite: options.and_then(|o| o.overwrite).unwrap_or(false),
                    ignore_if_exists: options.and_then(|o| o.ignore_if_exists).unwrap_or(false),
                    ..FileEditOptions::default()
                },
            })
        }
        lsp_types::ResourceOp::Delete(delete) => {
            let options = delete.options.as_ref();
            Edit::File(FileEdit {
                old_resource: Some(resource_path(&delete.uri)),
                new_resource: None,
                options: FileEditOptions {
                    recursive: options.and_then(|o| o.recursive).unwrap_or(false),
                    ignore_if_not_exists: options
                        .and_then(|o| o.ignore_if_not_exists)
                        .unwrap_or(false),
                    ..FileEditOptions::default()
                },
            })
        }
    }
}

/// File URIs map to their decoded filesystem path; other schemes keep the
/// percent-decoded URI path.
fn resource_path(uri: &lsp_types::Url) -> String {
    match uri.to_file_path() {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(()) => {
            let decoded = urlencoding::decode_binary(uri.path().as_bytes());
            String::from_utf8_lossy(&decoded).into_owned()
        }
    }
}

fn range_from_lsp(range: lsp_types::Range) -> EditRange {
    EditRange {
        start: EditPosition {
            line: range.start.line,
            character: range.start.character,
        },
        end: EditPosition {
            line: range.end.line,
            character: range.end.character,
        },
    }
}

#[cfg(test)]
#[path = "../tests/unit/lsp.rs"]
mod tests;
