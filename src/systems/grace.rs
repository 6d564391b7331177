//! Grace window after a lost life.
//!
//! While the player has no [`Collision`] it blinks and cannot be hit. When
//! the countdown runs out the collider comes back and the player is shown
//! again.

use bevy_ecs::prelude::*;

use crate::components::collision::{Collision, ObstacleType};
use crate::components::playercontrolled::PlayerControlled;
use crate::components::visual::Visual;
use crate::constants::PLAYER_DEFAULT_SIZE;
use crate::resources::grace::{GraceStep, GraceWindow};
use crate::resources::worldtime::WorldTime;

pub fn grace_system(
    time: Res<WorldTime>,
    mut grace: ResMut<GraceWindow>,
    mut query: Query<(Entity, &mut Visual), (With<PlayerControlled>, Without<Collision>)>,
    mut commands: Commands,
) {
    grace.on_frame(time.frame);
    for (entity, mut visual) in query.iter_mut() {
        match grace.step() {
            GraceStep::Running { blink } => {
                if blink {
                    visual.visible = !visual.visible;
                }
            }
            GraceStep::Expired => {
                let (width, height) = PLAYER_DEFAULT_SIZE;
                commands
                    .entity(entity)
                    .insert(Collision::new(width, height, ObstacleType::Player));
                visual.visible = true;
                log::debug!("Grace window over");
            }
        }
    }
}
