//! Keyboard control of the player.
//!
//! Arrow keys walk the player along the ground while it is not airborne.
//! SPACE starts a jump; CTRL toggles crouching. A jump edge wins over a
//! crouch edge pressed on the same tick, and only the winning edge is
//! consumed.

use bevy_ecs::prelude::*;

use crate::components::jump::Jump;
use crate::components::playercontrolled::{PlayerControlled, PlayerState, Pose, RidingRail};
use crate::components::position::Position;
use crate::components::visual::Visual;
use crate::constants::{
    IDLE_RIDE_Y, JUMP_FROM_GROUND_Y, JUMP_FROM_RAIL_Y, PLAYER_CROUCH_Y, PLAYER_MIN_X,
    PLAYER_RIGHT_MARGIN, PLAYER_STEP,
};
use crate::resources::input::{InputState, Key};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn player_input(
    mut input: ResMut<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut query: Query<(
        Entity,
        &mut PlayerControlled,
        &mut Position,
        &mut Visual,
        &mut Jump,
    )>,
    mut commands: Commands,
) {
    let max_x = screen.width() - PLAYER_RIGHT_MARGIN;
    for (entity, mut pc, mut position, mut visual, mut jump) in query.iter_mut() {
        if !pc.state.is_jumping() {
            if input.is_down(Key::Right) {
                position.x = (position.x + PLAYER_STEP).min(max_x);
            } else if input.is_down(Key::Left) {
                position.x = (position.x - PLAYER_STEP).max(PLAYER_MIN_X);
            }
        }

        if input.take_press(Key::Space) {
            let (next, from_y, pose) = match pc.state {
                PlayerState::Sliding => (PlayerState::JumpingOnRail, JUMP_FROM_RAIL_Y, Pose::Flip),
                PlayerState::Crouch => {
                    (PlayerState::JumpingFromCrouch, JUMP_FROM_GROUND_Y, Pose::Flip)
                }
                PlayerState::Idle => (PlayerState::Jumping, JUMP_FROM_GROUND_Y, Pose::Jump),
                _ => continue,
            };
            if pc.state == PlayerState::Sliding {
                commands.entity(entity).remove::<RidingRail>();
            }
            log::debug!("{} {:?} -> {:?}", pc.name, pc.state, next);
            pc.state = next;
            *jump = Jump {
                start_frame: time.frame,
                from_y,
            };
            *visual = pose.visual();
        } else if input.take_press(Key::Ctrl) {
            match pc.state {
                PlayerState::Idle => {
                    pc.state = PlayerState::Crouch;
                    position.y = PLAYER_CROUCH_Y;
                    *visual = Pose::Crouch.visual();
                }
                PlayerState::Crouch => {
                    pc.state = PlayerState::Idle;
                    position.y = IDLE_RIDE_Y;
                    *visual = Pose::Stand.visual();
                }
                _ => {}
            }
        }
    }
}
