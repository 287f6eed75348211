//! 预览树节点模型
//!
//! 节点存放在 slotmap 里，外部通过字符串 id 反查 `NodeId`。

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::path::{Path, PathBuf};

use super::edit::Edit;

new_key_type! { pub struct NodeId; }

/// One resource touched by one or more edits.
#[derive(Debug, Clone)]
pub struct GroupNode {
    pub id: CompactString,
    pub resource: PathBuf,
    pub file_contents: Option<String>,
    pub expanded: bool,
    pub selected: bool,
    /// `None` while the group hangs off the invisible root.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// One edit positioned under its group.
#[derive(Debug, Clone)]
pub struct EditNode {
    pub id: CompactString,
    pub parent: NodeId,
    pub resource: PathBuf,
    pub edit: Edit,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub enum Node {
    Group(GroupNode),
    Edit(EditNode),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Group(group) => group.id.as_str(),
            Node::Edit(edit) => edit.id.as_str(),
        }
    }

    pub fn resource(&self) -> &Path {
        match self {
            Node::Group(group) => group.resource.as_path(),
            Node::Edit(edit) => edit.resource.as_path(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Group(group) => group.parent,
            Node::Edit(edit) => Some(edit.parent),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Node::Group(group) => group.selected,
            Node::Edit(edit) => edit.selected,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Node::Group(group) => group.selected = selected,
            Node::Edit(edit) => edit.selected = selected,
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Node::Group(group) => Some(group),
            Node::Edit(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut GroupNode> {
        match self {
            Node::Group(group) => Some(group),
            Node::Edit(_) => None,
        }
    }

    pub fn as_edit(&self) -> Option<&EditNode> {
        match self {
            Node::Edit(edit) => Some(edit),
            Node::Group(_) => None,
        }
    }

    pub fn as_edit_mut(&mut self) -> Option<&mut EditNode> {
        match self {
            Node::Edit(edit) => Some(edit),
            Node::Group(_) => None,
        }
    }
}

pub fn is_group_node(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Group(_)))
}

pub fn is_edit_node(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Edit(_)))
}

/// Minimal by-id lookup the assembler needs to find nodes from a previous build.
pub trait NodeLookup {
    fn get_node(&self, id: &str) -> Option<NodeId>;
    fn node(&self, id: NodeId) -> Option<&Node>;
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: SlotMap<NodeId, Node>,
    by_id: FxHashMap<CompactString, NodeId>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Inserts a node and points its string id at it, replacing whatever the
    /// id resolved to before.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let key = CompactString::from(node.id());
        let id = self.nodes.insert(node);
        self.by_id.insert(key, id);
        id
    }

    /// Drops every node not reachable from `roots`.
    pub fn retain_reachable(&mut self, roots: &[NodeId]) -> usize {
        let mut keep = rustc_hash::FxHashSet::default();
        let mut stack: Vec<NodeId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            if !keep.insert(id) {
                continue;
            }
            if let Some(Node::Group(group)) = self.nodes.get(id) {
                stack.extend(group.children.iter().copied());
            }
        }

        let before = self.nodes.len();
        self.nodes.retain(|id, _| keep.contains(&id));
        let nodes = &self.nodes;
        self.by_id.retain(|_, id| nodes.contains_key(*id));
        before - self.nodes.len()
    }
}

impl NodeLookup for NodeArena {
    fn get_node(&self, id: &str) -> Option<NodeId> {
        self.by_id
            .get(id)
            .copied()
            .filter(|node_id| self.nodes.contains_key(*node_id))
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/node.rs"]
mod tests;
