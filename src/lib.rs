//! Frame-driven flexbox layout over a pooled node arena.
//!
//! Every frame the host declares a tree of nodes, lets the [`Layout`] resolve
//! it into whole-pixel rectangles, and paints them in z-order through a
//! [`Renderer`](renderer::Renderer). Nodes live in a fixed-capacity pool that
//! is rewound when the frame ends, so handles never outlive their frame.
//!
//! ```
//! use gala::prelude::*;
//!
//! let mut layout = Layout::new(Dimensions::new(400.0, 300.0), DEFAULT_NODE_CAPACITY);
//! layout.root().gap(10);
//! let a = layout.node().label("a").height(100.0).flex(1).id();
//! let b = layout.node().label("b").height(100.0).flex(1).id();
//!
//! layout.calculate();
//! assert_eq!(layout.get(a).unwrap().bounding_box().width, 195.0);
//! assert_eq!(layout.get(b).unwrap().bounding_box().x, 205.0);
//!
//! let mut renderer = RecordingRenderer::new();
//! layout.end(&mut renderer);
//! // root, a and b
//! assert_eq!(renderer.rects.len(), 3);
//! ```

pub mod align;
pub mod builder;
pub mod color;
pub mod engine;
pub mod errors;
pub mod math;
pub mod node;
pub mod pool;
pub mod prelude;
pub mod render_commands;
pub mod renderer;
pub mod renderers;
pub mod style;

pub use builder::NodeBuilder;
pub use color::Color;
pub use engine::{Layout, DEFAULT_NODE_CAPACITY};
pub use errors::{LayoutError, Result};
pub use node::{Node, NodeId};
pub use style::{percent, Style};
