//! Screen size resource.
//!
//! Stores the canvas dimensions in pixels. Spawners and the background wrap
//! read this to lay entities out relative to the canvas edges.

use bevy_ecs::prelude::Resource;

/// Current canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        ScreenSize { w: 1600, h: 900 }
    }
}
