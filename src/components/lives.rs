//! Remaining lives of the player.
//!
//! Each life is a heart entity on the HUD. Losing a life pops the last handle
//! and destroys that heart, so the count is always the length of the list.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::{Component, Entity};

use crate::constants::STARTING_LIVES;

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Lives {
    pub lives_ids: ArrayVec<Entity, STARTING_LIVES>,
}

impl Lives {
    pub fn new(hearts: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            lives_ids: hearts.into_iter().take(STARTING_LIVES).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.lives_ids.len()
    }

    /// Remove the most recently added heart.
    pub fn pop(&mut self) -> Option<Entity> {
        self.lives_ids.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn count_follows_the_list() {
        let mut world = World::new();
        let hearts: Vec<Entity> = (0..3).map(|_| world.spawn_empty().id()).collect();
        let mut lives = Lives::new(hearts.clone());
        assert_eq!(lives.count(), 3);
        assert_eq!(lives.pop(), Some(hearts[2]));
        assert_eq!(lives.count(), 2);
        assert_eq!(lives.count(), lives.lives_ids.len());
    }

    #[test]
    fn extra_hearts_are_ignored() {
        let mut world = World::new();
        let hearts: Vec<Entity> = (0..5).map(|_| world.spawn_empty().id()).collect();
        let lives = Lives::new(hearts);
        assert_eq!(lives.count(), STARTING_LIVES);
    }
}
