//! Invulnerability window after losing a life.

use bevy_ecs::prelude::Resource;

use crate::constants::{DIFFICULTY_PERIOD, GRACE_BLINK_MODULUS, GRACE_TICKS, GRACE_TICKS_LATE};

/// Countdown of the player's grace window, in ticks.
///
/// The window runs while the player has no
/// [`Collision`](crate::components::collision::Collision). It gets shorter
/// after the first difficulty checkpoint.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceWindow {
    pub countdown: u32,
    pub initial: u32,
}

impl Default for GraceWindow {
    fn default() -> Self {
        GraceWindow {
            countdown: GRACE_TICKS,
            initial: GRACE_TICKS,
        }
    }
}

/// What the grace system should do with the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraceStep {
    /// Still invulnerable; flip visibility when `blink` is set.
    Running { blink: bool },
    /// Window over; the player becomes collidable again.
    Expired,
}

impl GraceWindow {
    /// Shorten the window at the first checkpoint. A window already running
    /// keeps its remaining ticks.
    pub fn on_frame(&mut self, frame: u64) {
        if frame == DIFFICULTY_PERIOD {
            if self.countdown == self.initial {
                self.countdown = GRACE_TICKS_LATE;
            }
            self.initial = GRACE_TICKS_LATE;
        }
    }

    /// Advance the countdown by one tick.
    pub fn step(&mut self) -> GraceStep {
        if self.countdown > 0 {
            let blink = self.countdown % GRACE_BLINK_MODULUS == 0;
            self.countdown -= 1;
            GraceStep::Running { blink }
        } else {
            self.countdown = self.initial;
            GraceStep::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_lasts_its_length_plus_the_reset_tick() {
        let mut g = GraceWindow::default();
        let mut blinks = 0;
        for _ in 0..GRACE_TICKS {
            match g.step() {
                GraceStep::Running { blink } => blinks += blink as u32,
                GraceStep::Expired => panic!("expired early"),
            }
        }
        assert_eq!(g.step(), GraceStep::Expired);
        assert_eq!(g.countdown, GRACE_TICKS);
        // at 140, 120, ..., 20
        assert_eq!(blinks, 7);
    }

    #[test]
    fn first_checkpoint_shortens_an_idle_window() {
        let mut g = GraceWindow::default();
        g.on_frame(DIFFICULTY_PERIOD);
        assert_eq!(
            g,
            GraceWindow {
                countdown: GRACE_TICKS_LATE,
                initial: GRACE_TICKS_LATE,
            }
        );
    }

    #[test]
    fn running_window_is_not_cut_short() {
        let mut g = GraceWindow::default();
        g.step();
        g.on_frame(DIFFICULTY_PERIOD);
        assert_eq!(g.countdown, GRACE_TICKS - 1);
        assert_eq!(g.initial, GRACE_TICKS_LATE);
        g.on_frame(2 * DIFFICULTY_PERIOD);
        assert_eq!(g.initial, GRACE_TICKS_LATE);
    }
}
