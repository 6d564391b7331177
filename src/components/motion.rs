use bevy_ecs::prelude::Component;

/// Horizontal scroll speed in pixels per tick. Negative values move left.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub speed: i32,
}

impl Move {
    pub fn new(speed: i32) -> Self {
        Self { speed }
    }
}
