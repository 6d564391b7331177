//! Collision messages.
//!
//! The collision detector writes one [`CollisionEvent`] per ordering of every
//! intersecting pair into `Messages<CollisionEvent>`. The player collision
//! response drains the queue later in the same tick, so a message never
//! outlives the tick it was produced in.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::collision::ObstacleType;
use crate::geometry::CollisionType;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The entity receiving the event.
    pub entity: Entity,
    /// The entity it collided with.
    pub other: Entity,
    pub kind: CollisionType,
    /// Obstacle tag of `other` at detection time.
    pub other_obstacle: ObstacleType,
}
