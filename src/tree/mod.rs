//! 批量编辑预览树
//!
//! 把扁平的编辑列表按资源路径分组：根节点（不可见）下每个资源一个分组节点，
//! 分组下每条编辑一个编辑节点。重建时编辑节点按 id 复用，以保留选中状态。

pub mod assemble;
pub mod group;
pub mod preview;

pub use assemble::{build_groups, make_group_node, make_or_reuse_edit_node};
pub use group::extract_group_keys;
pub use preview::load_file_contents;

use rustc_hash::FxHashMap;
use std::fmt;

use crate::models::{Edit, GroupNode, Node, NodeArena, NodeId, NodeLookup, TreeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkEditTreeError {
    InvalidNodeId,
    NotAGroup,
}

impl fmt::Display for BulkEditTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkEditTreeError::InvalidNodeId => write!(f, "invalid node id"),
            BulkEditTreeError::NotAGroup => write!(f, "node is not a group"),
        }
    }
}

impl std::error::Error for BulkEditTreeError {}

#[derive(Debug, Default)]
pub struct BulkEditRoot {
    pub groups: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Group,
    Edit,
}

#[derive(Debug, Clone)]
pub struct BulkEditRow {
    pub id: NodeId,
    pub depth: u16,
    pub label: String,
    pub kind: RowKind,
    pub is_expanded: bool,
    pub is_selected: bool,
}

#[derive(Debug, Default)]
pub struct BulkEditTree {
    arena: NodeArena,
    root: Option<BulkEditRoot>,
    options: TreeOptions,
}

impl BulkEditTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replaces the root with groups built from `edits`.
    ///
    /// Callers must not overlap rebuilds; the tree has a single writer.
    pub fn init_tree(
        &mut self,
        edits: Option<&[Edit]>,
        file_contents: &FxHashMap<String, String>,
    ) {
        let keys = extract_group_keys(edits);
        let groups = build_groups(
            &mut self.arena,
            edits.unwrap_or_default(),
            &keys,
            file_contents,
            self.options,
        );

        let released = self.arena.retain_reachable(&groups);
        tracing::debug!(
            groups = groups.len(),
            nodes = self.arena.len(),
            released,
            "bulk edit tree rebuilt"
        );
        self.root = Some(BulkEditRoot { groups });
    }

    /// Loads preview content for every touched resource from disk, then
    /// rebuilds. Unreadable resources simply get no preview.
    pub async fn init_tree_from_disk(&mut self, edits: &[Edit]) {
        let keys = extract_group_keys(Some(edits));
        let file_contents = load_file_contents(&keys).await;
        self.init_tree(Some(edits), &file_contents);
    }

    pub fn root(&self) -> Option<&BulkEditRoot> {
        self.root.as_ref()
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupNode> {
        self.root
            .iter()
            .flat_map(|root| root.groups.iter())
            .filter_map(|&id| self.arena.node(id).and_then(Node::as_group))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.arena.node(id) {
            Some(Node::Group(group)) => group.children.as_slice(),
            _ => &[],
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.node(id).and_then(Node::parent)
    }

    pub fn toggle_expand(&mut self, id: NodeId) -> Result<(), BulkEditTreeError> {
        let group = self.group_mut(id)?;
        group.expanded = !group.expanded;
        Ok(())
    }

    pub fn expand(&mut self, id: NodeId) -> Result<(), BulkEditTreeError> {
        self.group_mut(id)?.expanded = true;
        Ok(())
    }

    pub fn collapse(&mut self, id: NodeId) -> Result<(), BulkEditTreeError> {
        self.group_mut(id)?.expanded = false;
        Ok(())
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.arena
            .node(id)
            .and_then(Node::as_group)
            .is_some_and(|g| g.expanded)
    }

    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> Result<(), BulkEditTreeError> {
        let node = self
            .arena
            .get_mut(id)
            .ok_or(BulkEditTreeError::InvalidNodeId)?;
        node.set_selected(selected);
        Ok(())
    }

    pub fn toggle_selected(&mut self, id: NodeId) -> Result<bool, BulkEditTreeError> {
        let node = self
            .arena
            .get_mut(id)
            .ok_or(BulkEditTreeError::InvalidNodeId)?;
        let selected = !node.is_selected();
        node.set_selected(selected);
        Ok(selected)
    }

    /// Edits under selected edit nodes, in tree order.
    pub fn selected_edits(&self) -> Vec<&Edit> {
        let mut out = Vec::new();
        for group in self.groups() {
            for &child in &group.children {
                if let Some(edit) = self.arena.node(child).and_then(Node::as_edit) {
                    if edit.selected {
                        out.push(&edit.edit);
                    }
                }
            }
        }
        out
    }

    pub fn flatten_for_view(&self) -> Vec<BulkEditRow> {
        let mut rows = Vec::new();
        let Some(root) = &self.root else {
            return rows;
        };

        for &group_id in &root.groups {
            let Some(group) = self.arena.node(group_id).and_then(Node::as_group) else {
                continue;
            };
            rows.push(BulkEditRow {
                id: group_id,
                depth: 0,
                label: group.id.to_string(),
                kind: RowKind::Group,
                is_expanded: group.expanded,
                is_selected: group.selected,
            });
            if !group.expanded {
                continue;
            }
            for &child in &group.children {
                if let Some(edit) = self.arena.node(child).and_then(Node::as_edit) {
                    rows.push(BulkEditRow {
                        id: child,
                        depth: 1,
                        label: edit.edit.label(),
                        kind: RowKind::Edit,
                        is_expanded: false,
                        is_selected: edit.selected,
                    });
                }
            }
        }

        rows
    }

    fn group_mut(&mut self, id: NodeId) -> Result<&mut GroupNode, BulkEditTreeError> {
        self.arena
            .get_mut(id)
            .ok_or(BulkEditTreeError::InvalidNodeId)?
            .as_group_mut()
            .ok_or(BulkEditTreeError::NotAGroup)
    }
}

impl NodeLookup for BulkEditTree {
    fn get_node(&self, id: &str) -> Option<NodeId> {
        self.arena.get_node(id)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.node(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/tree.rs"]
mod tests;
