use std::fmt;

use crate::math::BoundingBox;
use crate::style::Style;

/// Callback fired when the pointer hovers a node. It receives the node itself
/// and may restyle it for the current frame.
pub type HoverFn = Box<dyn FnMut(&mut Node)>;

/// Handle to a node slot, valid for the frame it was acquired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// The synthetic root sized to the viewport.
    pub const ROOT: NodeId = NodeId {
        index: 0,
        generation: 0,
    };

    pub fn is_root(self) -> bool {
        self.index == 0
    }

    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "#root")
        } else {
            write!(f, "#{}@{}", self.index, self.generation)
        }
    }
}

#[derive(Default)]
pub struct Node {
    pub(crate) in_use: bool,
    pub(crate) generation: u32,
    pub(crate) label: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) style: Style,
    pub(crate) bounding_box: BoundingBox,
    pub(crate) z_index: i16,
    pub(crate) on_hover: Option<HoverFn>,
}

impl Node {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Resolved rectangle, whole pixels once the layout has been calculated.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Resolved z-index after inheritance from the parent.
    pub fn z_index(&self) -> i16 {
        self.z_index
    }

    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    /// Clears the slot for reuse, keeping the child list's allocation.
    pub(crate) fn reset(&mut self) {
        self.in_use = false;
        self.label = None;
        self.parent = None;
        self.children.clear();
        self.style = Style::default();
        self.bounding_box = BoundingBox::default();
        self.z_index = 0;
        self.on_hover = None;
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("in_use", &self.in_use)
            .field("label", &self.label)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("bounding_box", &self.bounding_box)
            .field("z_index", &self.z_index)
            .field("has_hover", &self.on_hover.is_some())
            .finish()
    }
}
