use bevy_ecs::prelude::*;

use crate::components::motion::Move;
use crate::components::position::Position;
use crate::constants::DIFFICULTY_PERIOD;
use crate::resources::worldtime::WorldTime;

/// Scroll every moving entity by its speed.
pub fn movement(mut query: Query<(&mut Position, &Move)>) {
    for (mut position, motion) in query.iter_mut() {
        position.x += motion.speed as f32;
    }
}

/// Everything that moves gets one pixel per tick faster at each checkpoint,
/// backgrounds included.
pub fn speed_ramp(time: Res<WorldTime>, mut query: Query<&mut Move>) {
    if !time.is_checkpoint(DIFFICULTY_PERIOD) {
        return;
    }
    for mut motion in query.iter_mut() {
        motion.speed -= 1;
    }
}
