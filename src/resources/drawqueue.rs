//! Draw commands produced by the render systems.
//!
//! The core never touches a graphics API. Render systems push
//! [`DrawCommand`]s into the [`DrawQueue`] resource in draw order and the host
//! drains the queue once per frame.

use bevy_ecs::prelude::Resource;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A texture stretched over the rectangle at (x, y), rotated by
    /// `rotation` degrees about the rectangle's centre.
    Sprite {
        tex_key: &'static str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rotation: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: i32,
        color: TextColor,
    },
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DrawQueue {
    pub commands: SmallVec<[DrawCommand; 24]>,
}

impl DrawQueue {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn into_vec(self) -> Vec<DrawCommand> {
        self.commands.into_vec()
    }
}
