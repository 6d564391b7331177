//! Endless background.
//!
//! Two canvas-sized background entities scroll side by side. Once one has
//! slid fully off the left edge it is moved back to the right, keeping the
//! sub-canvas remainder so the seam does not drift.

use bevy_ecs::prelude::*;

use crate::components::group::{self, Group};
use crate::components::motion::Move;
use crate::components::position::Position;
use crate::resources::screensize::ScreenSize;

pub fn background_wrap(
    screen: Res<ScreenSize>,
    mut query: Query<(&mut Position, &Group), With<Move>>,
) {
    let width = screen.width();
    for (mut position, group) in query.iter_mut() {
        if group.name() != group::BACKGROUND {
            continue;
        }
        if position.x <= -width {
            position.x = width + position.x % width;
        }
    }
}
