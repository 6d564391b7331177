//! Group tag component.
//!
//! Every entity spawned by the game carries a [`Group`]. The tag names what
//! the entity is (`"player"`, `"obstacle"`, ...) and is what the world counts
//! when it enforces its entity capacity.

use bevy_ecs::prelude::Component;

pub const BACKGROUND: &str = "background";
pub const PLAYER: &str = "player";
pub const LIFE: &str = "life";
pub const SCORE_LABEL: &str = "score-label";
pub const OBSTACLE: &str = "obstacle";
pub const GRID_FLAG: &str = "grid-flag";
pub const PICKUP: &str = "pickup";
pub const RESULT: &str = "result";

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(&'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
