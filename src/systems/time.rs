//! Simulation clock.
//!
//! Advances the [`WorldTime`](crate::resources::worldtime::WorldTime) frame
//! counter once per simulation tick, before any simulation system runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the frame counter by one tick.
pub fn advance_world_time(world: &mut World) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.frame += 1;
}
