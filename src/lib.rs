//! bulk-edit-tree - 批量编辑预览树
//!
//! 模块结构：
//! - models: 数据模型（Edit, Node, TreeOptions）
//! - tree: 分组提取、节点组装与预览树（BulkEditTree）
//! - lsp: LSP WorkspaceEdit 到编辑列表的转换

pub mod lsp;
pub mod models;
pub mod tree;

pub use models::{
    is_edit_node, is_group_node, Edit, EditNode, GroupNode, Node, NodeId, NodeLookup, TreeOptions,
};
pub use tree::{BulkEditRow, BulkEditTree, BulkEditTreeError, RowKind};
