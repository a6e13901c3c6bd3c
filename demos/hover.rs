//! A card with two flex boxes and a hover-reactive panel.
//!
//! Run with `cargo run --example hover --features macroquad`.

use gala::prelude::*;
use macroquad::prelude::{clear_background, next_frame, screen_height, screen_width, Conf, WHITE};
use macroquad::rand::gen_range;

fn window_conf() -> Conf {
    Conf {
        window_title: "gala".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut layout = Layout::new(Dimensions::new(1280.0, 720.0), 200);
    let mut renderer = MacroquadRenderer::new();

    loop {
        clear_background(WHITE);
        layout.set_layout_dimensions(Dimensions::new(screen_width(), screen_height()));

        layout
            .node()
            .label("card")
            .size(percent(100), percent(100))
            .row()
            .align_items(Align::Center)
            .padding(10)
            .background_color((26, 26, 29))
            .children(|layout| {
                layout
                    .node()
                    .size(100.0, 100.0)
                    .flex(1)
                    .background_color(0x0079F1);
                layout
                    .node()
                    .size(100.0, 100.0)
                    .flex(1)
                    .background_color(0xD3B083);
                layout
                    .node()
                    .label("panel")
                    .height(200.0)
                    .left(20)
                    .right(10)
                    .bottom(100)
                    .flex(1)
                    .background_color(0xFF6DC2)
                    .on_hover(|node| {
                        node.style_mut()
                            .background_color(Color::rgb(0, gen_range::<u8>(0, 255), gen_range::<u8>(0, 255)));
                    });
            });

        layout.end(&mut renderer);
        next_frame().await
    }
}
