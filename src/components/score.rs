use bevy_ecs::prelude::{Component, Entity};

/// Points collected by the player, or the final result on the game over screen.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

/// Links a label entity to the entity whose [`Score`] it displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBind {
    pub target: Entity,
}
