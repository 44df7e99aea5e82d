//! Data models: the page document and the organization chart engine.

pub mod about_us;
pub mod node_id;
pub mod org_tree;

pub use about_us::{AboutUs, FormField, SocialMedia, SocialPlatform};
pub use node_id::{IdSource, NodeId, SequentialIdSource, UuidIdSource};
pub use org_tree::{
    add_child, append_root, create_node, remove, update, DepthFirst, Forest, ForestError,
    NodePatch, OrgField, OrgNode, NEW_NODE_NAME, NEW_NODE_POSITION,
};
