use crate::align::{Align, JustifyContent};
use crate::color::Color;
use crate::engine::Layout;
use crate::errors::Result;
use crate::node::{Node, NodeId};
use crate::style::{Display, FlexDirection, Margin, Padding, Position, Style};

/// Fluent handle over a node acquired this frame.
///
/// Every [`Style`] setter is mirrored here and writes straight into the
/// node, so a builder can be dropped at any point.
///
/// ```
/// use gala::prelude::*;
///
/// let mut layout = Layout::new(Dimensions::new(200.0, 100.0), 8);
/// let card = layout
///     .node()
///     .label("card")
///     .size(80.0, 40.0)
///     .padding(4)
///     .background_color(0x336699)
///     .id();
/// layout.calculate();
/// assert_eq!(layout.find("card"), Some(card));
/// ```
pub struct NodeBuilder<'a> {
    layout: &'a mut Layout,
    id: NodeId,
}

macro_rules! forward_style {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(mut self, $($arg: $ty),*) -> Self {
                self.layout.style_mut(self.id).$name($($arg),*);
                self
            }
        )*
    };
}

impl<'a> NodeBuilder<'a> {
    pub(crate) fn new(layout: &'a mut Layout, id: NodeId) -> Self {
        Self { layout, id }
    }

    /// Handle of the node being built.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Names the node for [`Layout::find`] and debug output.
    pub fn label(mut self, label: &str) -> Self {
        self.layout.set_label(self.id, label);
        self
    }

    /// Called with the node whenever it is the topmost one under the pointer.
    pub fn on_hover(mut self, callback: impl FnMut(&mut Node) + 'static) -> Self {
        self.layout.set_hover(self.id, Box::new(callback));
        self
    }

    /// Nodes created inside `declare` become children of this node.
    pub fn children(mut self, declare: impl FnOnce(&mut Layout)) -> Self {
        self.layout.with_parent(self.id, declare);
        self
    }

    /// Appends already created nodes as children, in order.
    pub fn contains(mut self, children: &[NodeId]) -> Result<Self> {
        self.layout.attach(self.id, children)?;
        Ok(self)
    }

    /// Edits the style in place, for setters not worth chaining.
    pub fn style(mut self, edit: impl FnOnce(&mut Style)) -> Self {
        edit(self.layout.style_mut(self.id));
        self
    }

    forward_style! {
        padding(padding: impl Into<Padding>);
        padding_left(value: u16);
        padding_right(value: u16);
        padding_top(value: u16);
        padding_bottom(value: u16);
        margin(margin: impl Into<Margin>);
        margin_left(value: i16);
        margin_right(value: i16);
        margin_top(value: i16);
        margin_bottom(value: i16);
        gap(gap: u16);

        position(position: Position);
        relative();
        absolute();
        left(value: i16);
        right(value: i16);
        top(value: i16);
        bottom(value: i16);
        z_index(z_index: i16);

        display(display: Display);
        direction(direction: FlexDirection);
        row();
        column();
        justify_content(justify: JustifyContent);
        align_items(align: Align);
        align_self(align: Align);
        flex(flex: u16);

        /// See [`Style::width`] for the encoding.
        width(width: f32);
        height(height: f32);
        size(width: f32, height: f32);
        background_color(color: impl Into<Color>);
    }
}
