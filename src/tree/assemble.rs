use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::models::{Edit, EditNode, GroupNode, Node, NodeArena, NodeId, NodeLookup, TreeOptions};

/// Materializes one group per key and its edit children.
///
/// Edit nodes from a previous build are reused when an edit node with the same
/// `<group>_<index>` id is still in `arena`; their `edit` is replaced in place
/// so selection held on the node survives. Group nodes are allocated fresh
/// unless `options.preserve_group_state` is set.
pub fn build_groups(
    arena: &mut NodeArena,
    edits: &[Edit],
    group_keys: &[CompactString],
    file_contents: &FxHashMap<String, String>,
    options: TreeOptions,
) -> Vec<NodeId> {
    let mut groups = Vec::with_capacity(group_keys.len());

    for key in group_keys {
        let contents = file_contents.get(key.as_str()).map(String::as_str);
        let group = make_group_node(arena, key, contents, options);

        let children: Vec<NodeId> = edits
            .iter()
            .filter(|edit| edit.resource_path() == Some(key.as_str()))
            .enumerate()
            .map(|(index, edit)| {
                make_or_reuse_edit_node(arena, edit.clone(), index, group, key)
            })
            .collect();

        tracing::trace!(group = %key, children = children.len(), "group assembled");
        if let Some(Node::Group(node)) = arena.get_mut(group) {
            node.children = children;
        }
        groups.push(group);
    }

    groups
}

pub fn make_group_node(
    arena: &mut NodeArena,
    id: &str,
    file_contents: Option<&str>,
    options: TreeOptions,
) -> NodeId {
    if options.preserve_group_state {
        if let Some(existing) = arena.get_node(id) {
            if let Some(Node::Group(group)) = arena.get_mut(existing) {
                group.file_contents = file_contents.map(str::to_owned);
                group.children.clear();
                return existing;
            }
        }
    }

    arena.insert(Node::Group(GroupNode {
        id: CompactString::from(id),
        resource: PathBuf::from(id),
        file_contents: file_contents.map(str::to_owned),
        expanded: options.expand_new_groups,
        selected: false,
        parent: None,
        children: Vec::new(),
    }))
}

pub fn make_or_reuse_edit_node(
    arena: &mut NodeArena,
    edit: Edit,
    index: usize,
    parent: NodeId,
    parent_id: &str,
) -> NodeId {
    let id = format_compact!("{}_{}", parent_id, index);

    if let Some(existing) = arena.get_node(&id) {
        if let Some(Node::Edit(node)) = arena.get_mut(existing) {
            node.edit = edit;
            node.parent = parent;
            tracing::trace!(%id, "edit node reused");
            return existing;
        }
    }

    arena.insert(Node::Edit(EditNode {
        id,
        parent,
        resource: PathBuf::from(parent_id),
        edit,
        selected: false,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tree/assemble.rs"]
mod tests;
