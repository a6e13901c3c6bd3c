//! The gala prelude, a single import for declaring and painting frames.
//!
//! ```rust
//! use gala::prelude::*;
//! ```

// Core types
pub use crate::builder::NodeBuilder;
pub use crate::engine::{Layout, DEFAULT_NODE_CAPACITY};
pub use crate::errors::LayoutError;
pub use crate::node::{Node, NodeId};
pub use crate::style::{Style, percent};

// Geometry
pub use crate::math::{BoundingBox, Dimensions, Vector2};

// Style values, types only
pub use crate::align::{Align, JustifyContent};
pub use crate::style::{Display, FlexDirection, Margin, Padding, Position};
pub use crate::color::Color;

// Painting
pub use crate::render_commands::RenderCommand;
pub use crate::renderer::Renderer;
pub use crate::renderers::RecordingRenderer;
#[cfg(feature = "macroquad")]
pub use crate::renderers::MacroquadRenderer;
