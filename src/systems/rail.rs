use bevy_ecs::prelude::*;

use crate::components::playercontrolled::{PlayerControlled, PlayerState, Pose, RidingRail};
use crate::components::position::Position;
use crate::components::visual::Visual;
use crate::constants::{IDLE_RIDE_Y, RAIL_EXIT_DISTANCE};

/// Drop the player off the rail it is grinding once the rail has scrolled
/// far enough behind, or is gone altogether.
pub fn rail_exit(
    mut players: Query<(
        Entity,
        &mut PlayerControlled,
        &mut Position,
        &mut Visual,
        &RidingRail,
    )>,
    rails: Query<&Position, Without<PlayerControlled>>,
    mut commands: Commands,
) {
    for (entity, mut pc, mut position, mut visual, riding) in players.iter_mut() {
        if pc.state != PlayerState::Sliding {
            continue;
        }
        let passed = match rails.get(riding.rail) {
            Ok(rail) => rail.x < position.x && position.x - rail.x >= RAIL_EXIT_DISTANCE,
            Err(_) => true,
        };
        if !passed {
            continue;
        }
        log::debug!("{} left the rail", pc.name);
        pc.state = PlayerState::Idle;
        position.y = IDLE_RIDE_Y;
        *visual = Pose::Stand.visual();
        commands.entity(entity).remove::<RidingRail>();
    }
}
