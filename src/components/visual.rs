use bevy_ecs::prelude::Component;

/// Visual is identified by a texture key and its size in canvas pixels.
///
/// The same rectangle is used for drawing and for collision tests, rotated
/// about its own centre by `rotation` degrees. Replacing a `Visual` (a pose
/// change, a broken sprite) resets rotation and makes the entity visible.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub tex_key: &'static str,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    pub rotation: f32,
}

impl Visual {
    pub fn new(tex_key: &'static str, width: f32, height: f32) -> Self {
        Self {
            tex_key,
            width,
            height,
            visible: true,
            rotation: 0.0,
        }
    }

    /// Same as [`Visual::new`] but not drawn. Used for pickups, which only
    /// exist to be collided with.
    pub fn hidden(tex_key: &'static str, width: f32, height: f32) -> Self {
        Self {
            visible: false,
            ..Self::new(tex_key, width, height)
        }
    }
}
