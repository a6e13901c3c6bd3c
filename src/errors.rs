use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Every pool slot is in use this frame. The pool size is a startup
    /// parameter, so hosts should size it for their largest frame.
    #[error("node pool exhausted: all {capacity} nodes are in use this frame")]
    PoolExhausted { capacity: usize },
    /// The handle belongs to a previous frame or was never acquired.
    #[error("node {0} is not live in the current frame")]
    StaleNode(NodeId),
    #[error("the root node cannot be attached as a child")]
    RootAsChild,
    #[error("node {child} is already attached to a parent")]
    AlreadyAttached { child: NodeId },
    /// `child` is `parent` itself or one of its ancestors.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}
