use raylib::prelude::*;

use crate::resources::drawqueue::{DrawCommand, TextColor};
use crate::resources::texturestore::TextureStore;

/// Rasterize a frame's draw commands.
///
/// Sprites are rotated about their centre. Text positions are baselines, as
/// the game lays its labels out that way, so they are shifted up by the font
/// size for raylib, which draws from the top.
pub fn render_commands(
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    commands: &[DrawCommand],
) {
    d.clear_background(Color::BLACK);
    for command in commands {
        match command {
            DrawCommand::Sprite {
                tex_key,
                x,
                y,
                width,
                height,
                rotation,
            } => {
                let Some(texture) = textures.get(tex_key) else {
                    log::warn!("Missing texture '{tex_key}'");
                    continue;
                };
                let source = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: texture.width as f32,
                    height: texture.height as f32,
                };
                let dest = Rectangle {
                    x: x + width / 2.0,
                    y: y + height / 2.0,
                    width: *width,
                    height: *height,
                };
                let origin = Vector2 {
                    x: width / 2.0,
                    y: height / 2.0,
                };
                d.draw_texture_pro(texture, source, dest, origin, *rotation, Color::WHITE);
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                color,
            } => {
                let color = match color {
                    TextColor::Black => Color::BLACK,
                    TextColor::White => Color::WHITE,
                };
                d.draw_text(text, *x as i32, (*y as i32) - size, *size, color);
            }
        }
    }
}
