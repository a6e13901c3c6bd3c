use crate::color::Color;
use crate::renderer::Renderer;

/// One `draw_rect` call as seen by a [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

/// Headless renderer that keeps every rectangle it is asked to draw.
/// Useful in tests and for hosts that paint later on their own.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rects: Vec<DrawnRect>,
    /// Reported as the pointer position during hover dispatch.
    pub pointer: Option<(i32, i32)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer(x: i32, y: i32) -> Self {
        Self {
            rects: Vec::new(),
            pointer: Some((x, y)),
        }
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.rects.push(DrawnRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.pointer
    }
}
