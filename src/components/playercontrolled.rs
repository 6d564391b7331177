//! Player state components.
//!
//! [`PlayerControlled`] identifies the player entity and carries its state
//! machine. Transitions are driven by the player input, jump, rail and
//! collision response systems; see [`crate::systems`] for the order they run in.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::visual::Visual;
use crate::constants::{
    PLAYER_CROUCH_SIZE, PLAYER_DEFAULT_SIZE, PLAYER_IN_JUMP_SIZE, PLAYER_ON_RAIL_SIZE, tex,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Idle,
    Jumping,
    Sliding,
    JumpingOnRail,
    Crouch,
    JumpingFromCrouch,
}

impl PlayerState {
    pub fn is_jumping(self) -> bool {
        matches!(
            self,
            PlayerState::Jumping | PlayerState::JumpingFromCrouch | PlayerState::JumpingOnRail
        )
    }

    pub fn is_grounded(self) -> bool {
        matches!(self, PlayerState::Idle | PlayerState::Crouch)
    }
}

#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct PlayerControlled {
    pub state: PlayerState,
    pub name: String,
}

impl PlayerControlled {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: PlayerState::Idle,
            name: name.into(),
        }
    }
}

/// Sprite the player shows in each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Stand,
    Crouch,
    Jump,
    Flip,
    Slide,
}

impl Pose {
    pub fn visual(self) -> Visual {
        let (tex_key, (width, height)) = match self {
            Pose::Stand => (tex::BOBER_STAND, PLAYER_DEFAULT_SIZE),
            Pose::Crouch => (tex::BOBER_CROUCH, PLAYER_CROUCH_SIZE),
            Pose::Jump => (tex::BOBER_JUMP, PLAYER_IN_JUMP_SIZE),
            Pose::Flip => (tex::BOBER_FLIP, PLAYER_IN_JUMP_SIZE),
            Pose::Slide => (tex::BOBER_SLIDE, PLAYER_ON_RAIL_SIZE),
        };
        Visual::new(tex_key, width, height)
    }
}

/// The rail the player is currently grinding. Present only while
/// [`PlayerState::Sliding`].
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RidingRail {
    pub rail: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumping_states() {
        assert!(PlayerState::Jumping.is_jumping());
        assert!(PlayerState::JumpingOnRail.is_jumping());
        assert!(PlayerState::JumpingFromCrouch.is_jumping());
        assert!(!PlayerState::Sliding.is_jumping());
        assert!(!PlayerState::Idle.is_jumping());
        assert!(PlayerState::Crouch.is_grounded());
        assert!(!PlayerState::Sliding.is_grounded());
    }

    #[test]
    fn poses_reset_rotation_and_visibility() {
        let v = Pose::Jump.visual();
        assert_eq!(v.tex_key, tex::BOBER_JUMP);
        assert_eq!((v.width, v.height), PLAYER_IN_JUMP_SIZE);
        assert!(v.visible);
        assert_eq!(v.rotation, 0.0);
        assert_eq!(Pose::Crouch.visual().width, PLAYER_CROUCH_SIZE.0);
    }
}
