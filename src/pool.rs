use log::{debug, trace};

use crate::errors::{LayoutError, Result};
use crate::math::Dimensions;
use crate::node::{Node, NodeId};

const ROOT_LABEL: &str = "Root";

/// Fixed-capacity arena of node slots, rewound once per frame.
///
/// Slot 0 holds the synthetic root and is never handed out by
/// [`NodePool::acquire`]; the remaining `capacity` slots are.
pub struct NodePool {
    nodes: Vec<Node>,
    count: usize,
    generation: u32,
    viewport: Dimensions,
}

impl NodePool {
    pub fn new(capacity: usize, viewport: Dimensions) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.resize_with(capacity + 1, Node::default);
        debug!(
            "node pool: {} slots, {} bytes",
            capacity,
            std::mem::size_of::<Node>() * nodes.len()
        );
        let mut pool = Self {
            nodes,
            count: 0,
            generation: 1,
            viewport,
        };
        pool.reset_root();
        pool
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of slots handed out this frame.
    pub fn in_use(&self) -> usize {
        self.count
    }

    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Dimensions) {
        self.viewport = viewport;
        self.nodes[0]
            .style
            .size(viewport.width, viewport.height);
    }

    /// Hands out the next free slot with a default style.
    pub fn acquire(&mut self) -> Result<NodeId> {
        if self.count >= self.capacity() {
            return Err(LayoutError::PoolExhausted {
                capacity: self.capacity(),
            });
        }
        self.count += 1;
        let index = self.count;
        let node = &mut self.nodes[index];
        node.reset();
        node.in_use = true;
        node.generation = self.generation;
        Ok(NodeId {
            index: index as u32,
            generation: self.generation,
        })
    }

    /// True for the root and for nodes acquired this frame.
    pub fn is_live(&self, id: NodeId) -> bool {
        if id.is_root() {
            return true;
        }
        self.nodes
            .get(id.index())
            .is_some_and(|node| node.in_use && node.generation == id.generation)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if self.is_live(id) {
            Some(&self.nodes[id.index()])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.is_live(id) {
            Some(&mut self.nodes[id.index()])
        } else {
            None
        }
    }

    /// Unchecked access for handles the engine produced itself this frame.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Appends `children` to `parent` in order.
    ///
    /// Each child is validated before it is linked, so on error the children
    /// before the offending one stay attached.
    pub fn attach(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        if !self.is_live(parent) {
            return Err(LayoutError::StaleNode(parent));
        }
        for &child in children {
            if child.is_root() {
                return Err(LayoutError::RootAsChild);
            }
            if !self.is_live(child) {
                return Err(LayoutError::StaleNode(child));
            }
            if self.node(child).parent.is_some() {
                return Err(LayoutError::AlreadyAttached { child });
            }
            if self.is_ancestor_or_self(child, parent) {
                return Err(LayoutError::Cycle { parent, child });
            }
            self.link(parent, child);
        }
        Ok(())
    }

    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id.index == candidate.index {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    /// Handles of every node acquired this frame, in acquisition order.
    pub(crate) fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[1..=self.count].iter().enumerate().map(|(i, node)| NodeId {
            index: (i + 1) as u32,
            generation: node.generation,
        })
    }

    /// Releases every slot, invalidating all handles from this frame.
    pub fn end_frame(&mut self) {
        trace!(
            "frame {} reset, {} nodes released",
            self.generation,
            self.count
        );
        for node in &mut self.nodes[1..=self.count] {
            node.reset();
        }
        self.count = 0;
        self.generation = self.generation.wrapping_add(1);
        self.reset_root();
    }

    fn reset_root(&mut self) {
        let viewport = self.viewport;
        let root = &mut self.nodes[0];
        root.reset();
        root.in_use = true;
        root.label = Some(ROOT_LABEL.to_owned());
        root.style.size(viewport.width, viewport.height);
    }
}
