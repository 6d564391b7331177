//! Jump animation.
//!
//! A jump follows a fixed arc: `y` rises from the take-off height to
//! `height` pixels above it at the half-way point and comes back down, with
//! a cubic ease-out on both halves. Meanwhile the sprite spins, backwards for
//! a rail jump, forwards for a crouch jump, and with a small ollie tilt for a
//! plain jump.

use bevy_ecs::prelude::*;

use crate::components::jump::Jump;
use crate::components::playercontrolled::{PlayerControlled, PlayerState, Pose};
use crate::components::position::Position;
use crate::components::visual::Visual;
use crate::constants::{IDLE_RIDE_Y, OLLIE_PHASE_SPLIT};
use crate::resources::jumptuning::JumpTuning;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two floats.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out on [0, 1].
pub fn ease_out(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

/// 0 at both ends, 1 in the middle, eased on each side.
pub fn spike(t: f32) -> f32 {
    if t <= 0.5 {
        ease_out(t / 0.5)
    } else {
        ease_out((1.0 - t) / 0.5)
    }
}

/// Height of a jump started at `from_y` after the fraction `t` of its length.
pub fn jump_y(from_y: f32, height: f32, t: f32) -> f32 {
    lerp(from_y, from_y - height, spike(t))
}

pub fn jump_system(
    time: Res<WorldTime>,
    mut tuning: ResMut<JumpTuning>,
    mut query: Query<(&mut PlayerControlled, &mut Position, &mut Visual, &Jump)>,
) {
    let airborne = query.iter().any(|(pc, ..)| pc.state.is_jumping());
    tuning.update(time.frame, airborne);

    for (mut pc, mut position, mut visual, jump) in query.iter_mut() {
        if !pc.state.is_jumping() {
            continue;
        }
        let elapsed = time.frame.saturating_sub(jump.start_frame) as f32;
        if elapsed >= tuning.duration {
            log::debug!("{} landed", pc.name);
            pc.state = PlayerState::Idle;
            position.y = IDLE_RIDE_Y;
            *visual = Pose::Stand.visual();
            continue;
        }

        let t = elapsed / tuning.duration;
        position.y = jump_y(jump.from_y, tuning.height, t);
        visual.rotation += match pc.state {
            PlayerState::JumpingOnRail => -tuning.rotation_speed,
            PlayerState::JumpingFromCrouch => tuning.rotation_speed,
            _ if t < OLLIE_PHASE_SPLIT => tuning.ollie_up,
            _ => tuning.ollie_down,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn spike_is_zero_at_the_ends_and_one_in_the_middle() {
        assert!(approx_eq(spike(0.0), 0.0));
        assert!(approx_eq(spike(0.5), 1.0));
        assert!(approx_eq(spike(1.0), 0.0));
        assert!(approx_eq(spike(0.25), spike(0.75)));
    }

    #[test]
    fn ease_out_is_fast_then_slow() {
        assert!(approx_eq(ease_out(0.0), 0.0));
        assert!(approx_eq(ease_out(1.0), 1.0));
        // 1 - 0.5^3
        assert!(approx_eq(ease_out(0.5), 0.875));
    }

    #[test]
    fn jump_samples() {
        assert!(approx_eq(jump_y(400.0, 120.0, 0.0), 400.0));
        assert!(approx_eq(jump_y(400.0, 120.0, 0.5), 280.0));
        assert!(approx_eq(jump_y(370.0, 120.0, 0.5), 250.0));
        let quarter = jump_y(400.0, 120.0, 0.25);
        assert!(quarter < 400.0 && quarter > 280.0);
    }
}
