//! 编辑描述：文本编辑与文件编辑
//!
//! 这里只描述"要做什么"，不负责应用编辑。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditPosition {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditRange {
    pub start: EditPosition,
    pub end: EditPosition,
}

impl EditRange {
    pub fn new(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Self {
        Self {
            start: EditPosition {
                line: start_line,
                character: start_char,
            },
            end: EditPosition {
                line: end_line,
                character: end_char,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub resource: String,
    #[serde(default)]
    pub range: EditRange,
    #[serde(default)]
    pub new_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileEditOptions {
    pub overwrite: bool,
    pub ignore_if_exists: bool,
    pub recursive: bool,
    pub ignore_if_not_exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEditKind {
    Create,
    Rename,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_resource: Option<String>,
    #[serde(default)]
    pub options: FileEditOptions,
}

impl FileEdit {
    /// `None -> Some` is a create, `Some -> None` a delete, anything else a rename.
    pub fn kind(&self) -> FileEditKind {
        match (&self.old_resource, &self.new_resource) {
            (None, Some(_)) => FileEditKind::Create,
            (Some(_), None) => FileEditKind::Delete,
            _ => FileEditKind::Rename,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Edit {
    Text(TextEdit),
    File(FileEdit),
}

impl Edit {
    pub fn text(resource: impl Into<String>, range: EditRange, new_text: impl Into<String>) -> Self {
        Edit::Text(TextEdit {
            resource: resource.into(),
            range,
            new_text: new_text.into(),
            version: None,
        })
    }

    pub fn create_file(resource: impl Into<String>, options: FileEditOptions) -> Self {
        Edit::File(FileEdit {
            old_resource: None,
            new_resource: Some(resource.into()),
            options,
        })
    }

    pub fn rename_file(
        old_resource: impl Into<String>,
        new_resource: impl Into<String>,
        options: FileEditOptions,
    ) -> Self {
        Edit::File(FileEdit {
            old_resource: Some(old_resource.into()),
            new_resource: Some(new_resource.into()),
            options,
        })
    }

    pub fn delete_file(resource: impl Into<String>, options: FileEditOptions) -> Self {
        Edit::File(FileEdit {
            old_resource: Some(resource.into()),
            new_resource: None,
            options,
        })
    }

    /// The path this edit is grouped under.
    ///
    /// Text edits always target their resource. File edits point forward to
    /// the new resource; a pure deletion has nothing to point at and returns
    /// `None`, which keeps it out of every group.
    pub fn resource_path(&self) -> Option<&str> {
        match self {
            Edit::Text(edit) => Some(edit.resource.as_str()),
            Edit::File(edit) => edit.new_resource.as_deref(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Edit::Text(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Edit::File(_))
    }

    /// Short human label used by the preview rows.
    pub fn label(&self) -> String {
        match self {
            Edit::Text(edit) => {
                let start = edit.range.start;
                format!(
                    "{}:{} {:?}",
                    start.line.saturating_add(1),
                    start.character.saturating_add(1),
                    edit.new_text
                )
            }
            Edit::File(edit) => match edit.kind() {
                FileEditKind::Create => "create file".to_string(),
                FileEditKind::Delete => "delete file".to_string(),
                FileEditKind::Rename => format!(
                    "rename from {}",
                    edit.old_resource.as_deref().unwrap_or_default()
                ),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit.rs"]
mod tests;
