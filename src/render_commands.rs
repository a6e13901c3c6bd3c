use std::collections::VecDeque;

use crate::color::Color;
use crate::math::BoundingBox;
use crate::node::{Node, NodeId};
use crate::pool::NodePool;
use crate::renderer::Renderer;
use crate::style::Display;

/// A filled rectangle for one node, produced once layout has been calculated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    /// Node this command was produced for.
    pub id: NodeId,
    /// Resolved rectangle in whole pixels.
    pub bounding_box: BoundingBox,
    /// The fill color.
    pub color: Color,
    /// Resolved z-index the command was ordered by.
    pub z_index: i16,
}

impl RenderCommand {
    pub(crate) fn from_node(id: NodeId, node: &Node) -> Self {
        Self {
            id,
            bounding_box: node.bounding_box,
            color: node.style.background_color,
            z_index: node.z_index,
        }
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        let bbox = self.bounding_box;
        renderer.draw_rect(
            bbox.x as i32,
            bbox.y as i32,
            bbox.width as i32,
            bbox.height as i32,
            self.color,
        );
    }
}

/// Flattens the tree breadth-first from the root into `out`, skipping hidden
/// subtrees, then orders it by resolved z-index. The sort is stable, so nodes
/// sharing a z-index keep their traversal order.
pub(crate) fn collect_paint_order(
    pool: &NodePool,
    queue: &mut VecDeque<NodeId>,
    out: &mut Vec<NodeId>,
) {
    out.clear();
    queue.clear();
    queue.push_back(NodeId::ROOT);
    while let Some(id) = queue.pop_front() {
        out.push(id);
        for &child in pool.node(id).children() {
            if pool.node(child).style.display != Display::None {
                queue.push_back(child);
            }
        }
    }
    out.sort_by_key(|&id| pool.node(id).z_index);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Dimensions;

    #[test]
    fn paint_order_is_stable_by_z() {
        let mut pool = NodePool::new(4, Dimensions::new(10.0, 10.0));
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        let c = pool.acquire().unwrap();
        let hidden = pool.acquire().unwrap();
        pool.attach(NodeId::ROOT, &[a, b, c, hidden]).unwrap();
        pool.node_mut(a).z_index = 3;
        pool.node_mut(hidden).style.display = Display::None;
        pool.node_mut(hidden).z_index = -1;

        let mut queue = VecDeque::new();
        let mut order = Vec::new();
        collect_paint_order(&pool, &mut queue, &mut order);
        assert_eq!(order, vec![NodeId::ROOT, b, c, a]);
    }
}
