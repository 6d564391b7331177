//! Jump parameters and their difficulty ramp.
//!
//! Every [`DIFFICULTY_PERIOD`] ticks the jump gets shorter and spins faster.
//! On the first checkpoint the whole tuning is replaced by a slightly easier
//! set, applied as soon as the player is on the ground.

use bevy_ecs::prelude::Resource;

use crate::constants::{
    DIFFICULTY_PERIOD, EASED_JUMP_DURATION, EASED_ROTATION_SPEED, JUMP_DIVISOR, JUMP_DURATION,
    JUMP_HEIGHT, JUMP_ROTATION_SPEED, OLLIE_DOWN_SPEED, OLLIE_UP_SPEED,
};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct JumpTuning {
    /// Apex height above the take-off point, in pixels.
    pub height: f32,
    /// Jump length in ticks.
    pub duration: f32,
    /// Degrees per tick for flips (rail and crouch jumps).
    pub rotation_speed: f32,
    /// Degrees per tick during the first part of a plain jump.
    pub ollie_up: f32,
    /// Degrees per tick during the rest of a plain jump.
    pub ollie_down: f32,
    divisor: f32,
    ease_pending: bool,
}

impl Default for JumpTuning {
    fn default() -> Self {
        JumpTuning {
            height: JUMP_HEIGHT,
            duration: JUMP_DURATION,
            rotation_speed: JUMP_ROTATION_SPEED,
            ollie_up: OLLIE_UP_SPEED,
            ollie_down: OLLIE_DOWN_SPEED,
            divisor: JUMP_DIVISOR,
            ease_pending: false,
        }
    }
}

impl JumpTuning {
    /// Called once per tick before any jump is sampled.
    ///
    /// `airborne` tells whether the player is mid-jump; the easier tuning of
    /// the first checkpoint waits for the landing.
    pub fn update(&mut self, frame: u64, airborne: bool) {
        if frame % DIFFICULTY_PERIOD == 0 {
            self.ramp();
        }
        if frame == DIFFICULTY_PERIOD && airborne {
            self.ease_pending = true;
        } else if frame == DIFFICULTY_PERIOD || (self.ease_pending && !airborne) {
            self.ease();
        }
    }

    fn ramp(&mut self) {
        self.duration -= self.duration / self.divisor;
        self.rotation_speed += self.rotation_speed / self.divisor;
        self.ollie_up += self.ollie_up / self.divisor;
        self.ollie_down += self.ollie_down / self.divisor;
        self.divisor += 1.0;
        log::debug!(
            "Jump ramp: duration={:.2} rotation={:.2}",
            self.duration,
            self.rotation_speed
        );
    }

    fn ease(&mut self) {
        self.height = JUMP_HEIGHT;
        self.duration = EASED_JUMP_DURATION;
        self.rotation_speed = EASED_ROTATION_SPEED;
        self.ollie_up = OLLIE_UP_SPEED;
        self.ollie_down = OLLIE_DOWN_SPEED;
        self.ease_pending = false;
    }

    pub fn is_ease_pending(&self) -> bool {
        self.ease_pending
    }
}
