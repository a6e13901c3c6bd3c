use ::macroquad::prelude::{draw_rectangle, mouse_position, Color as MacroquadColor};

use crate::color::Color;
use crate::renderer::Renderer;

fn to_macroquad_color(color: Color) -> MacroquadColor {
    let [r, g, b, a] = color.to_f32_array();
    MacroquadColor { r, g, b, a }
}

/// Paints into the current macroquad frame and reads the mouse from it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadRenderer;

impl MacroquadRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MacroquadRenderer {
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        draw_rectangle(
            x as f32,
            y as f32,
            width as f32,
            height as f32,
            to_macroquad_color(color),
        );
    }

    fn mouse_pos(&self) -> Option<(i32, i32)> {
        let (x, y) = mouse_position();
        Some((x as i32, y as i32))
    }
}
