//! Collidability components.
//!
//! An entity takes part in collision detection only while it holds a
//! [`Collision`]. Removing it is how the player's grace window and "used up"
//! obstacles are expressed.

use bevy_ecs::prelude::{Component, Entity};

/// What an entity is, as far as collision responses are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleType {
    Box,
    Rail,
    Player,
    ScorePoint,
    Grid,
    GridStick,
}

impl ObstacleType {
    /// Obstacles that cost a life when hit in the wrong pose.
    pub fn is_hazard(self) -> bool {
        matches!(self, ObstacleType::Box | ObstacleType::Rail | ObstacleType::Grid)
    }
}

/// Marks an entity as collidable this tick.
///
/// The size is informative; detection uses the rectangle of the entity's
/// [`Visual`](super::visual::Visual).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    pub width: f32,
    pub height: f32,
    pub obstacle: ObstacleType,
}

impl Collision {
    pub fn new(width: f32, height: f32, obstacle: ObstacleType) -> Self {
        Self {
            width,
            height,
            obstacle,
        }
    }
}

/// Links a grid flag to the stick drawn underneath it. When the flag is hit
/// the stick is left behind showing the broken grid.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLink {
    pub stick: Entity,
}
