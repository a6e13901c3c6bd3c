use crate::color::Color;

/// The drawing backend a [`Layout`](crate::Layout) paints into.
///
/// Rectangles arrive in paint order, lowest z-index first.
pub trait Renderer {
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Pointer position in layout pixels, if the backend has one.
    fn mouse_pos(&self) -> Option<(i32, i32)> {
        None
    }
}
