//! 数据模型层

pub mod edit;
pub mod node;
pub mod options;

pub use edit::{Edit, EditPosition, EditRange, FileEdit, FileEditKind, FileEditOptions, TextEdit};
pub use node::{
    is_edit_node, is_group_node, EditNode, GroupNode, Node, NodeArena, NodeId, NodeLookup,
};
pub use options::{ConfigError, TreeOptions};
