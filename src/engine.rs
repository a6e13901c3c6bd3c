//! The layout engine: owns the node pool and resolves declared styles into
//! pixel rectangles once per frame.
//!
//! Resolution runs in ordered passes over the tree hanging off the synthetic
//! root:
//!
//! 0. pool nodes without a parent are attached to the root,
//! 1. a breadth-first walk records discovery order,
//! 2. bottom-up (reverse discovery order) every auto-sized node takes its
//!    intrinsic size from its already-sized children,
//! 3. top-down (discovery order) every node resolves percentages, offsets and
//!    alignment against its final parent, then sizes and places its children.

use std::collections::VecDeque;
use std::fmt::Write;

use log::{debug, error, trace};
use rustc_hash::FxHashMap;

use crate::align::{Align, JustifyContent};
use crate::builder::NodeBuilder;
use crate::errors::Result;
use crate::math::{Axis, BoundingBox, Dimensions, Vector2};
use crate::node::{Node, NodeId};
use crate::pool::NodePool;
use crate::render_commands::{collect_paint_order, RenderCommand};
use crate::renderer::Renderer;
use crate::style::{Length, Margin, Position, Style};

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_NODE_CAPACITY: usize = 1024;

// ============================================================================
// Layout - the frame context
// ============================================================================

pub struct Layout {
    pool: NodePool,

    // Declaration state
    open_parents: Vec<NodeId>,
    labels: FxHashMap<String, NodeId>,

    // Traversal buffers, rewound every frame
    visit_order: Vec<NodeId>,
    queue: VecDeque<NodeId>,
    children_buffer: Vec<NodeId>,

    // Output
    paint_order: Vec<NodeId>,
    render_commands: Vec<RenderCommand>,
    hovered: Option<NodeId>,
}

impl Layout {
    /// Creates a layout for a viewport of `dimensions` that can hold up to
    /// `capacity` nodes per frame.
    pub fn new(dimensions: Dimensions, capacity: usize) -> Self {
        Self {
            pool: NodePool::new(capacity, dimensions),
            open_parents: Vec::new(),
            labels: FxHashMap::default(),
            visit_order: Vec::with_capacity(capacity + 1),
            queue: VecDeque::with_capacity(capacity + 1),
            children_buffer: Vec::new(),
            paint_order: Vec::with_capacity(capacity + 1),
            render_commands: Vec::with_capacity(capacity + 1),
            hovered: None,
        }
    }

    pub fn set_layout_dimensions(&mut self, dimensions: Dimensions) {
        self.pool.set_viewport(dimensions);
    }

    pub fn layout_dimensions(&self) -> Dimensions {
        self.pool.viewport()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Nodes handed out so far this frame.
    pub fn nodes_in_use(&self) -> usize {
        self.pool.in_use()
    }

    // ========================================================================
    // Declaration
    // ========================================================================

    /// Takes a fresh node from the pool.
    ///
    /// Running out of nodes means the pool was sized too small at startup;
    /// this is fatal. Use [`Layout::try_node`] to handle it instead.
    pub fn node(&mut self) -> NodeBuilder<'_> {
        let id = match self.acquire() {
            Ok(id) => id,
            Err(error) => {
                error!("{error}");
                panic!("gala error: {error}");
            }
        };
        NodeBuilder::new(self, id)
    }

    /// Like [`Layout::node`], but hands pool exhaustion back to the caller.
    pub fn try_node(&mut self) -> Result<NodeBuilder<'_>> {
        let id = self.acquire()?;
        Ok(NodeBuilder::new(self, id))
    }

    fn acquire(&mut self) -> Result<NodeId> {
        let id = self.pool.acquire()?;
        if let Some(&parent) = self.open_parents.last() {
            self.pool.link(parent, id);
        }
        Ok(id)
    }

    /// Builder over the synthetic root, e.g. to set its direction or gap.
    /// Its size always follows the layout dimensions.
    pub fn root(&mut self) -> NodeBuilder<'_> {
        NodeBuilder::new(self, NodeId::ROOT)
    }

    /// Appends `children` to `parent`. See [`NodePool::attach`] for the
    /// malformed-tree checks.
    pub fn attach(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        self.pool.attach(parent, children)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.pool.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.pool.get_mut(id)
    }

    /// First node labelled `label` this frame.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.labels
            .get(label)
            .copied()
            .filter(|&id| self.pool.is_live(id))
    }

    pub(crate) fn style_mut(&mut self, id: NodeId) -> &mut Style {
        &mut self.pool.node_mut(id).style
    }

    pub(crate) fn set_label(&mut self, id: NodeId, label: &str) {
        let node = self.pool.node_mut(id);
        if let Some(previous) = node.label.replace(label.to_owned()) {
            if self.labels.get(&previous) == Some(&id) {
                self.labels.remove(&previous);
            }
        }
        self.labels.entry(label.to_owned()).or_insert(id);
    }

    pub(crate) fn set_hover(&mut self, id: NodeId, callback: crate::node::HoverFn) {
        self.pool.node_mut(id).on_hover = Some(callback);
    }

    /// Runs `declare` with `parent` as the implicit parent of new nodes.
    pub(crate) fn with_parent(&mut self, parent: NodeId, declare: impl FnOnce(&mut Layout)) {
        self.open_parents.push(parent);
        declare(self);
        self.open_parents.pop();
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Resolves the geometry of every node and the paint order.
    ///
    /// Calling it again on an unchanged tree yields identical geometry.
    pub fn calculate(&mut self) {
        self.attach_orphans();
        self.collect_visit_order();
        self.size_intrinsic();
        self.place_nodes();
        collect_paint_order(&self.pool, &mut self.queue, &mut self.paint_order);
        self.hovered = None;
        self.build_render_commands();
        debug!(
            "resolved {} nodes, {} painted",
            self.visit_order.len(),
            self.paint_order.len()
        );
    }

    /// Fires the hover callback of the topmost painted node under `pointer`.
    ///
    /// Only that one node is hovered, even when several overlap. Must run
    /// after [`Layout::calculate`].
    pub fn dispatch_hover(&mut self, pointer: Vector2) -> Option<NodeId> {
        let pool = &self.pool;
        let hovered = self
            .paint_order
            .iter()
            .rev()
            .copied()
            .find(|&id| pool.node(id).bounding_box.contains(pointer));
        self.hovered = hovered;

        if let Some(id) = hovered {
            let node = self.pool.node_mut(id);
            if let Some(mut callback) = node.on_hover.take() {
                callback(&mut *node);
                node.on_hover = Some(callback);
            }
        }
        hovered
    }

    /// Node picked by the last [`Layout::dispatch_hover`], as a handle of the
    /// frame it was dispatched in.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Commands of the last calculated frame, in paint order.
    pub fn render_commands(&self) -> &[RenderCommand] {
        &self.render_commands
    }

    /// Finishes the frame: resolves the layout, dispatches hover against the
    /// renderer's pointer, paints in z-order and releases the pool.
    pub fn end(&mut self, renderer: &mut impl Renderer) {
        self.calculate();
        if let Some(pointer) = renderer.mouse_pos() {
            self.dispatch_hover(pointer.into());
            self.build_render_commands();
        }
        for command in &self.render_commands {
            command.draw(renderer);
        }
        self.end_frame();
    }

    /// Releases every node. Handles from this frame become stale.
    pub fn end_frame(&mut self) {
        self.pool.end_frame();
        self.labels.clear();
        self.open_parents.clear();
        self.visit_order.clear();
        self.queue.clear();
        self.children_buffer.clear();
        self.paint_order.clear();
    }

    fn build_render_commands(&mut self) {
        self.render_commands.clear();
        for &id in &self.paint_order {
            self.render_commands
                .push(RenderCommand::from_node(id, self.pool.node(id)));
        }
    }

    /// Indented dump of the resolved tree, one node per line.
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, NodeId::ROOT, 0);
        out
    }

    fn write_tree(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = self.pool.node(id);
        let bbox = node.bounding_box;
        let _ = writeln!(
            out,
            "{:indent$}{} {}: x={} y={} w={} h={} z={}",
            "",
            node.label().unwrap_or("-"),
            id,
            bbox.x,
            bbox.y,
            bbox.width,
            bbox.height,
            node.z_index,
            indent = depth * 4
        );
        for &child in &node.children {
            self.write_tree(out, child, depth + 1);
        }
    }

    // ========================================================================
    // Layout algorithm
    // ========================================================================

    fn attach_orphans(&mut self) {
        let pool = &self.pool;
        self.children_buffer.clear();
        self.children_buffer.extend(
            pool.live_ids()
                .filter(|&id| pool.node(id).parent.is_none()),
        );
        for &id in &self.children_buffer {
            self.pool.link(NodeId::ROOT, id);
        }
    }

    /// Breadth-first from the root. Also rewinds resolved geometry so every
    /// pass starts from the declared styles.
    fn collect_visit_order(&mut self) {
        self.visit_order.clear();
        self.queue.clear();
        self.queue.push_back(NodeId::ROOT);
        while let Some(id) = self.queue.pop_front() {
            self.visit_order.push(id);
            let node = self.pool.node_mut(id);
            node.bounding_box = BoundingBox::default();
            node.z_index = node.style.z_index;
            self.queue.extend(node.children.iter().copied());
        }

        let viewport = self.pool.viewport();
        self.pool.node_mut(NodeId::ROOT).bounding_box =
            BoundingBox::new(0.0, 0.0, viewport.width, viewport.height);
    }

    fn size_intrinsic(&mut self) {
        for i in (1..self.visit_order.len()).rev() {
            let id = self.visit_order[i];
            let style = self.pool.node(id).style;
            for axis in Axis::BOTH {
                let size = match style.length(axis) {
                    Length::Points(px) => px,
                    Length::Percent(_) => 0.0,
                    Length::Auto => self.intrinsic_size(id, &style, axis),
                };
                self.pool.node_mut(id).bounding_box.set_size(axis, size);
            }
        }
    }

    /// Size of the in-flow children along `axis` plus the node's padding.
    /// Percentage-sized children only count towards the gaps, their size is
    /// unknown until the top-down pass.
    fn intrinsic_size(&self, id: NodeId, style: &Style, axis: Axis) -> f32 {
        let along_main = style.direction.main_axis() == axis;
        let mut content: f32 = 0.0;
        let mut count = 0usize;
        for &child_id in &self.pool.node(id).children {
            let child = self.pool.node(child_id);
            if !child.style.in_flow() {
                continue;
            }
            count += 1;
            if child.style.length(axis).is_percent() {
                continue;
            }
            let extent = child.bounding_box.size(axis) + child.style.margin.along(axis);
            if along_main {
                content += extent;
            } else {
                content = content.max(extent);
            }
        }
        if along_main && count > 1 {
            content += style.gap as f32 * (count - 1) as f32;
        }
        content + style.padding.along(axis)
    }

    fn place_nodes(&mut self) {
        for i in 0..self.visit_order.len() {
            let id = self.visit_order[i];
            if !id.is_root() {
                self.place_self(id);
            }
            self.place_children(id);
            trace!("{} -> {:?}", id, self.pool.node(id).bounding_box);
        }
    }

    /// Resolves a node's own box against its already final parent.
    fn place_self(&mut self, id: NodeId) {
        let Some(parent_id) = self.pool.node(id).parent else {
            return;
        };
        let parent = self.pool.node(parent_id);
        let parent_box = parent.bounding_box;
        let parent_style = parent.style;
        let parent_z = parent.z_index;

        let node = self.pool.node_mut(id);
        let style = node.style;
        let mut bbox = node.bounding_box;
        let absolute = style.position == Position::Absolute;

        for axis in Axis::BOTH {
            let length = style.length(axis);
            if let Length::Percent(fraction) = length {
                bbox.set_size(axis, fraction * parent_box.size(axis));
            }

            let (start, end) = style.offsets(axis);
            let parent_start = parent_box.position(axis);
            let flow_position = bbox.position(axis);
            if start != 0.0 && end != 0.0 && length.is_auto() {
                // Stretched between both offsets, always measured from the parent.
                bbox.set_position(axis, parent_start + start);
                bbox.set_size(axis, parent_box.size(axis) - start - end);
            } else if start != 0.0 {
                let anchor = if absolute { parent_start } else { flow_position };
                bbox.set_position(axis, anchor + start);
            } else if end != 0.0 {
                let position = if absolute {
                    parent_start + parent_box.size(axis) - end - bbox.size(axis)
                } else {
                    flow_position - end
                };
                bbox.set_position(axis, position);
            } else if absolute {
                bbox.set_position(axis, parent_start);
            }
        }

        if absolute {
            if let Some(align) = style.align_self {
                let cross = parent_style.direction.cross_axis();
                align_cross(
                    &mut bbox,
                    align,
                    cross,
                    parent_box.position(cross) + parent_style.padding.start(cross),
                    parent_box.size(cross) - parent_style.padding.along(cross),
                    &style.margin,
                    true,
                );
            }
        }

        if style.z_index == 0 {
            node.z_index = parent_z;
        }

        bbox.x += style.margin.left as f32;
        bbox.y += style.margin.top as f32;
        node.bounding_box = bbox.quantized();
    }

    /// Sizes flex children and places every in-flow child of `id`.
    fn place_children(&mut self, id: NodeId) {
        let node = self.pool.node(id);
        if node.children.is_empty() {
            return;
        }
        let bbox = node.bounding_box;
        let style = node.style;
        self.children_buffer.clear();
        self.children_buffer.extend_from_slice(&node.children);

        let main = style.direction.main_axis();
        let cross = main.cross();
        let justify = style.justify_content;
        let distributes = justify.distributes_space();

        // Percentages resolve against this node's final size.
        for &child_id in &self.children_buffer {
            let child = self.pool.node_mut(child_id);
            for axis in Axis::BOTH {
                if let Length::Percent(fraction) = child.style.length(axis) {
                    child.bounding_box.set_size(axis, fraction * bbox.size(axis));
                }
            }
        }

        // Free main-axis space and total flex.
        let mut in_flow = 0usize;
        let mut total_flex = 0u32;
        let mut available = bbox.size(main) - style.padding.along(main);
        for &child_id in &self.children_buffer {
            let child = self.pool.node(child_id);
            if !child.style.in_flow() {
                continue;
            }
            in_flow += 1;
            available -= child.style.margin.along(main);
            if child.style.flex == 0 || distributes {
                available -= child.bounding_box.size(main);
            } else {
                total_flex += child.style.flex as u32;
            }
        }
        if in_flow == 0 {
            return;
        }
        if !distributes {
            available -= style.gap as f32 * (in_flow - 1) as f32;
        }

        let mut remaining = available;
        if total_flex > 0 {
            let share = available.max(0.0);
            for &child_id in &self.children_buffer {
                let child = self.pool.node_mut(child_id);
                if !child.style.in_flow() || child.style.flex == 0 {
                    continue;
                }
                let size = (child.style.flex as f32 / total_flex as f32 * share).round();
                child.bounding_box.set_size(main, size);
                remaining -= size;
            }
        }

        // Main axis.
        let origin = bbox.position(main) + style.padding.start(main);
        let (lead, spacing) = if distributes {
            let free = remaining.max(0.0);
            let slots = match justify {
                JustifyContent::SpaceBetween => in_flow - 1,
                JustifyContent::SpaceAround => in_flow,
                _ => in_flow + 1,
            };
            let spacing = if slots > 0 { free / slots as f32 } else { 0.0 };
            let lead = match justify {
                JustifyContent::SpaceBetween => 0.0,
                JustifyContent::SpaceAround => spacing / 2.0,
                _ => spacing,
            };
            (lead, spacing)
        } else {
            let lead = match justify {
                JustifyContent::Center => remaining / 2.0,
                JustifyContent::FlexEnd => remaining,
                _ => 0.0,
            };
            (lead, style.gap as f32)
        };

        let mut cursor = origin + lead;
        let cross_start = bbox.position(cross) + style.padding.start(cross);
        let cross_size = bbox.size(cross) - style.padding.along(cross);
        for &child_id in &self.children_buffer {
            let child = self.pool.node_mut(child_id);
            if !child.style.in_flow() {
                continue;
            }
            child.bounding_box.set_position(main, cursor);
            cursor += child.style.margin.along(main) + child.bounding_box.size(main) + spacing;

            // Cross axis.
            let align = child.style.align_self.unwrap_or(style.align_items);
            let stretchable = child.style.length(cross).is_auto();
            align_cross(
                &mut child.bounding_box,
                align,
                cross,
                cross_start,
                cross_size,
                &child.style.margin,
                stretchable,
            );
        }
    }
}

/// Positions `bbox` on `axis` inside a content box starting at
/// `content_start` and `content_size` long. The node's own margins are added
/// later when it places itself, so they are reserved here.
fn align_cross(
    bbox: &mut BoundingBox,
    align: Align,
    axis: Axis,
    content_start: f32,
    content_size: f32,
    margin: &Margin,
    stretchable: bool,
) {
    let margins = margin.along(axis);
    let position = match align {
        Align::FlexStart => content_start,
        Align::Center => content_start + (content_size - bbox.size(axis) - margins) / 2.0,
        Align::FlexEnd => content_start + content_size - bbox.size(axis) - margins,
        Align::Stretch => {
            if stretchable {
                bbox.set_size(axis, (content_size - margins).max(0.0));
            }
            content_start
        }
    };
    bbox.set_position(axis, position);
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::color::Color;
    use crate::errors::LayoutError;
    use crate::renderers::RecordingRenderer;
    use crate::style::{percent, Display};

    fn layout() -> Layout {
        Layout::new(Dimensions::new(400.0, 300.0), 32)
    }

    fn bbox(layout: &Layout, id: NodeId) -> BoundingBox {
        layout.get(id).unwrap().bounding_box()
    }

    fn xs(layout: &Layout, ids: &[NodeId]) -> Vec<f32> {
        ids.iter().map(|&id| bbox(layout, id).x).collect()
    }

    /// A `width` x 100 row container holding `count` 50x50 children.
    fn row_of_squares(layout: &mut Layout, width: f32, count: usize, justify: JustifyContent) -> Vec<NodeId> {
        let mut ids = Vec::new();
        layout
            .node()
            .size(width, 100.0)
            .justify_content(justify)
            .children(|layout| {
                for _ in 0..count {
                    ids.push(layout.node().size(50.0, 50.0).id());
                }
            });
        ids
    }

    #[test]
    fn flex_children_share_root_width() {
        let mut layout = layout();
        layout.root().gap(10);
        let a = layout.node().height(100.0).flex(1).id();
        let b = layout.node().height(100.0).flex(1).id();
        layout.calculate();

        assert_eq!(bbox(&layout, a), BoundingBox::new(0.0, 0.0, 195.0, 100.0));
        assert_eq!(bbox(&layout, b), BoundingBox::new(205.0, 0.0, 195.0, 100.0));
        assert_eq!(layout.get(a).unwrap().parent(), Some(NodeId::ROOT));
    }

    #[test]
    fn flex_weights_split_free_space() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout.node().size(330.0, 50.0).padding(5).children(|layout| {
            ids.push(layout.node().flex(1).id());
            ids.push(layout.node().width(20.0).id());
            ids.push(layout.node().flex(2).margin_left(10).id());
        });
        layout.calculate();

        // 330 - 10 padding - 20 fixed - 10 margin = 290 free
        assert_eq!(bbox(&layout, ids[0]).width, 97.0);
        assert_eq!(bbox(&layout, ids[2]).width, 193.0);
        assert_eq!(xs(&layout, &ids), vec![5.0, 102.0, 132.0]);
    }

    #[test]
    fn percentages_resolve_against_parent() {
        let mut layout = layout();
        let mut child = None;
        layout.node().size(333.0, 120.0).children(|layout| {
            child = Some(layout.node().width(percent(50)).height(percent(100)).id());
        });
        layout.calculate();

        let child = bbox(&layout, child.unwrap());
        assert_eq!(child.width, 167.0);
        assert_eq!(child.height, 120.0);
    }

    #[test]
    fn intrinsic_size_wraps_children() {
        let mut layout = layout();
        let container = layout
            .node()
            .padding(5)
            .gap(10)
            .align_self(Align::FlexStart)
            .children(|layout| {
                layout.node().size(30.0, 20.0);
                layout.node().size(40.0, 50.0);
                layout.node().absolute().size(500.0, 500.0);
                layout.node().display(Display::None).size(500.0, 500.0);
            })
            .id();
        layout.calculate();

        assert_eq!(bbox(&layout, container), BoundingBox::new(0.0, 0.0, 90.0, 60.0));
    }

    #[test]
    fn calculate_is_idempotent() {
        let mut layout = layout();
        layout.root().gap(4).padding(6);
        layout.node().flex(1).padding(3).children(|layout| {
            layout.node().width(percent(30)).height(20.0).margin(2);
            layout.node().flex(2).align_self(Align::Center).height(10.0);
        });
        layout.node().absolute().left(5).right(5).top(7).height(percent(10));
        layout.node().size(40.0, 40.0).z_index(3).left(2);

        let boxes = |layout: &Layout| -> Vec<BoundingBox> {
            layout
                .render_commands()
                .iter()
                .map(|command| command.bounding_box)
                .collect()
        };
        layout.calculate();
        let first = boxes(&layout);
        let first_tree = layout.debug_tree();
        layout.calculate();
        assert_eq!(boxes(&layout), first);
        assert_eq!(layout.debug_tree(), first_tree);
    }

    #[test]
    fn space_between_pins_the_ends() {
        let mut layout = layout();
        let ids = row_of_squares(&mut layout, 300.0, 3, JustifyContent::SpaceBetween);
        layout.calculate();
        assert_eq!(xs(&layout, &ids), vec![0.0, 125.0, 250.0]);
    }

    #[test]
    fn space_around_and_evenly() {
        let mut layout = layout();
        let around = row_of_squares(&mut layout, 300.0, 3, JustifyContent::SpaceAround);
        let evenly = row_of_squares(&mut layout, 350.0, 3, JustifyContent::SpaceEvenly);
        layout.root().column();
        layout.calculate();

        assert_eq!(xs(&layout, &around), vec![25.0, 125.0, 225.0]);
        assert_eq!(xs(&layout, &evenly), vec![50.0, 150.0, 250.0]);
    }

    #[test]
    fn space_modes_without_room() {
        let mut layout = layout();
        layout.root().column();
        let single = row_of_squares(&mut layout, 300.0, 1, JustifyContent::SpaceBetween);
        let crowded = row_of_squares(&mut layout, 80.0, 2, JustifyContent::SpaceEvenly);
        let empty = layout
            .node()
            .justify_content(JustifyContent::SpaceAround)
            .id();
        layout.calculate();

        assert_eq!(xs(&layout, &single), vec![0.0]);
        assert_eq!(xs(&layout, &crowded), vec![0.0, 50.0]);
        assert_eq!(bbox(&layout, empty).width, 400.0);
    }

    #[test]
    fn justify_center_and_end() {
        let mut layout = layout();
        layout.root().column();
        let mut center = Vec::new();
        layout
            .node()
            .size(300.0, 100.0)
            .gap(10)
            .justify_content(JustifyContent::Center)
            .children(|layout| {
                center.push(layout.node().size(50.0, 50.0).id());
                center.push(layout.node().size(50.0, 50.0).id());
            });
        let end = row_of_squares(&mut layout, 300.0, 2, JustifyContent::FlexEnd);
        layout.calculate();

        assert_eq!(xs(&layout, &center), vec![95.0, 155.0]);
        assert_eq!(xs(&layout, &end), vec![200.0, 250.0]);
    }

    #[test]
    fn align_items_on_cross_axis() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout
            .node()
            .size(200.0, 100.0)
            .align_items(Align::Center)
            .children(|layout| {
                ids.push(layout.node().size(20.0, 40.0).id());
                ids.push(layout.node().size(20.0, 40.0).align_self(Align::FlexEnd).id());
                ids.push(layout.node().width(20.0).align_self(Align::Stretch).margin(5).id());
                ids.push(layout.node().size(20.0, 40.0).align_self(Align::FlexStart).id());
            });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[0]).y, 30.0);
        assert_eq!(bbox(&layout, ids[1]).y, 60.0);
        assert_eq!(bbox(&layout, ids[2]).y, 5.0);
        assert_eq!(bbox(&layout, ids[2]).height, 90.0);
        assert_eq!(bbox(&layout, ids[3]).y, 0.0);
    }

    #[test]
    fn column_direction() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout
            .node()
            .size(100.0, 300.0)
            .column()
            .gap(5)
            .children(|layout| {
                ids.push(layout.node().height(50.0).id());
                ids.push(layout.node().height(50.0).id());
                ids.push(layout.node().flex(1).id());
            });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[0]), BoundingBox::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(bbox(&layout, ids[1]), BoundingBox::new(0.0, 55.0, 100.0, 50.0));
        assert_eq!(bbox(&layout, ids[2]), BoundingBox::new(0.0, 110.0, 100.0, 190.0));
    }

    #[test]
    fn hidden_nodes_leave_the_flow() {
        let mut layout = layout();
        let mut ids = Vec::new();
        let mut hidden_child = None;
        layout.node().size(300.0, 100.0).children(|layout| {
            ids.push(layout.node().size(50.0, 50.0).id());
            ids.push(
                layout
                    .node()
                    .size(50.0, 50.0)
                    .display(Display::None)
                    .children(|layout| hidden_child = Some(layout.node().size(5.0, 5.0).id()))
                    .id(),
            );
            ids.push(layout.node().size(50.0, 50.0).id());
        });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[2]).x, 50.0);
        let painted: Vec<NodeId> = layout.render_commands().iter().map(|c| c.id).collect();
        assert!(!painted.contains(&ids[1]));
        assert!(!painted.contains(&hidden_child.unwrap()));
        assert!(painted.contains(&ids[2]));
    }

    #[test]
    fn absolute_offsets_anchor_to_parent() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout.node().size(200.0, 100.0).margin_left(15).children(|layout| {
            ids.push(layout.node().absolute().left(10).right(20).height(30.0).id());
            ids.push(layout.node().absolute().right(10).bottom(5).size(50.0, 20.0).id());
            ids.push(layout.node().absolute().size(10.0, 10.0).id());
            ids.push(layout.node().size(10.0, 10.0).id());
        });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[0]), BoundingBox::new(25.0, 0.0, 170.0, 30.0));
        assert_eq!(bbox(&layout, ids[1]), BoundingBox::new(155.0, 75.0, 50.0, 20.0));
        assert_eq!(bbox(&layout, ids[2]), BoundingBox::new(15.0, 0.0, 10.0, 10.0));
        assert_eq!(bbox(&layout, ids[3]).x, 15.0);
    }

    #[test]
    fn relative_offsets_shift_from_flow() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout.node().size(200.0, 100.0).children(|layout| {
            ids.push(layout.node().size(20.0, 20.0).left(7).top(3).id());
            ids.push(layout.node().size(20.0, 20.0).right(4).id());
        });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[0]), BoundingBox::new(7.0, 3.0, 20.0, 20.0));
        assert_eq!(bbox(&layout, ids[1]).x, 16.0);
    }

    #[test]
    fn offset_stretch_is_measured_from_parent() {
        let mut layout = layout();
        let mut stretched = None;
        let parent = layout
            .node()
            .size(200.0, 100.0)
            .children(|layout| {
                layout.node().size(50.0, 50.0);
                stretched = Some(layout.node().height(20.0).left(10).right(10).id());
            })
            .id();
        layout.calculate();

        let parent = bbox(&layout, parent);
        let stretched = bbox(&layout, stretched.unwrap());
        assert_eq!(stretched.x, 10.0);
        assert_eq!(stretched.width, 180.0);
        assert!(stretched.x + stretched.width <= parent.x + parent.width);
    }

    #[test]
    fn relative_children_stay_inside_content_box() {
        let mut layout = layout();
        layout.root().column().padding(8).gap(4);
        layout.node().padding(6).gap(5).height(100.0).children(|layout| {
            layout.node().flex(1);
            layout.node().width(percent(50)).height(20.0);
            layout.node().size(30.0, 10.0).align_self(Align::Center);
            layout.node().height(20.0).left(10).right(10);
        });
        layout
            .node()
            .padding(4)
            .height(60.0)
            .justify_content(JustifyContent::SpaceBetween)
            .children(|layout| {
                for _ in 0..3 {
                    layout.node().size(40.0, 40.0);
                }
            });
        layout
            .node()
            .flex(1)
            .padding(10)
            .column()
            .align_items(Align::Center)
            .children(|layout| {
                layout.node().size(100.0, 50.0);
            });
        layout.calculate();

        let mut checked = 0;
        for command in layout.render_commands() {
            let node = layout.get(command.id).unwrap();
            let Some(parent) = node.parent() else {
                continue;
            };
            if node.style().position != Position::Relative {
                continue;
            }
            let parent = layout.get(parent).unwrap();
            let outer = parent.bounding_box();
            let padding = parent.style().padding;
            let inner = command.bounding_box;
            assert!(inner.x >= outer.x + padding.left as f32, "{} {:?}", command.id, inner);
            assert!(inner.y >= outer.y + padding.top as f32, "{} {:?}", command.id, inner);
            assert!(
                inner.x + inner.width <= outer.x + outer.width - padding.right as f32,
                "{} {:?}",
                command.id,
                inner
            );
            assert!(
                inner.y + inner.height <= outer.y + outer.height - padding.bottom as f32,
                "{} {:?}",
                command.id,
                inner
            );
            checked += 1;
        }
        assert_eq!(checked, 11);
    }

    #[test]
    fn relabelling_drops_the_old_label() {
        let mut layout = layout();
        let id = layout.node().label("draft").label("final").id();
        let other = layout.node().label("draft").id();

        assert_eq!(layout.find("final"), Some(id));
        assert_eq!(layout.find("draft"), Some(other));
        assert_eq!(layout.get(id).unwrap().label(), Some("final"));
    }

    #[test]
    fn absolute_align_self_uses_content_box() {
        let mut layout = layout();
        let mut ids = Vec::new();
        layout.node().size(200.0, 100.0).padding(10).children(|layout| {
            ids.push(layout.node().absolute().width(20.0).align_self(Align::Stretch).id());
            ids.push(layout.node().absolute().size(20.0, 20.0).align_self(Align::Center).id());
            ids.push(layout.node().absolute().size(20.0, 20.0).align_self(Align::FlexEnd).id());
        });
        layout.calculate();

        assert_eq!(bbox(&layout, ids[0]).y, 10.0);
        assert_eq!(bbox(&layout, ids[0]).height, 80.0);
        assert_eq!(bbox(&layout, ids[1]).y, 40.0);
        assert_eq!(bbox(&layout, ids[2]).y, 70.0);
    }

    #[test]
    fn z_index_inherits_and_orders_painting() {
        let mut layout = layout();
        let mut child = None;
        let raised = layout
            .node()
            .size(10.0, 10.0)
            .z_index(2)
            .children(|layout| child = Some(layout.node().size(5.0, 5.0).id()))
            .id();
        let lifted = layout.node().size(10.0, 10.0).z_index(1).id();
        let flat = layout.node().size(10.0, 10.0).id();
        layout.calculate();

        let child = child.unwrap();
        assert_eq!(layout.get(child).unwrap().z_index(), 2);
        let painted: Vec<NodeId> = layout.render_commands().iter().map(|c| c.id).collect();
        assert_eq!(painted, vec![NodeId::ROOT, flat, lifted, raised, child]);
    }

    #[test]
    fn only_the_topmost_node_is_hovered() {
        let mut layout = layout();
        let below = Rc::new(Cell::new(0));
        let above = Rc::new(Cell::new(0));

        let counter = Rc::clone(&below);
        layout
            .node()
            .absolute()
            .size(50.0, 50.0)
            .z_index(1)
            .on_hover(move |_| counter.set(counter.get() + 1));
        let counter = Rc::clone(&above);
        let top = layout
            .node()
            .absolute()
            .size(50.0, 50.0)
            .z_index(2)
            .on_hover(move |_| counter.set(counter.get() + 1))
            .id();
        layout.calculate();

        assert_eq!(layout.dispatch_hover(Vector2::new(50.0, 50.0)), Some(top));
        assert_eq!(layout.hovered(), Some(top));
        assert_eq!(above.get(), 1);
        assert_eq!(below.get(), 0);

        assert_eq!(layout.dispatch_hover(Vector2::new(120.0, 10.0)), Some(NodeId::ROOT));
        assert_eq!(above.get(), 1);
    }

    #[test]
    fn end_paints_hover_restyle_and_releases() {
        let mut layout = layout();
        let button = layout
            .node()
            .size(100.0, 40.0)
            .background_color(Color::BLACK)
            .on_hover(|node| {
                node.style_mut().background_color(Color::WHITE);
            })
            .id();

        let mut renderer = RecordingRenderer::with_pointer(10, 10);
        layout.end(&mut renderer);

        assert_eq!(renderer.rects.len(), 2);
        let drawn = renderer.rects[1];
        assert_eq!((drawn.x, drawn.y, drawn.width, drawn.height), (0, 0, 100, 40));
        assert_eq!(drawn.color, Color::WHITE);
        assert_eq!(layout.render_commands()[1].color, Color::WHITE);
        assert_eq!(layout.nodes_in_use(), 0);
        assert!(layout.get(button).is_none());
        assert_eq!(layout.find("anything"), None);
    }

    #[test]
    fn frames_reuse_the_pool() {
        let mut layout = Layout::new(Dimensions::new(100.0, 100.0), 2);
        for _ in 0..3 {
            layout.node().label("a").width(10.0);
            layout.node().label("b").width(20.0);
            assert!(matches!(
                layout.try_node(),
                Err(LayoutError::PoolExhausted { capacity: 2 })
            ));
            let b = layout.find("b").unwrap();
            layout.calculate();
            assert_eq!(bbox(&layout, b).x, 10.0);
            layout.end(&mut RecordingRenderer::new());
        }
    }

    #[test]
    #[should_panic(expected = "node pool exhausted")]
    fn node_panics_when_exhausted() {
        let mut layout = Layout::new(Dimensions::new(100.0, 100.0), 1);
        layout.node();
        layout.node();
    }

    #[test]
    fn layout_dimensions_drive_the_root() {
        let mut layout = layout();
        layout.set_layout_dimensions(Dimensions::new(640.0, 480.0));
        let filler = layout.node().flex(1).id();
        layout.calculate();

        assert_eq!(bbox(&layout, NodeId::ROOT), BoundingBox::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(bbox(&layout, filler), BoundingBox::new(0.0, 0.0, 640.0, 480.0));
    }

    #[test]
    fn debug_tree_lists_labels() {
        let mut layout = layout();
        layout.node().label("sidebar").width(80.0).column().children(|layout| {
            layout.node().label("item").height(20.0);
        });
        layout.calculate();

        let tree = layout.debug_tree();
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Root #root"));
        assert!(lines[1].starts_with("    sidebar "));
        assert!(lines[2].starts_with("        item "));
        assert!(lines[2].contains("w=80 h=20"));
    }
}
