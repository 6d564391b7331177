//! Obstacle generator state.
//!
//! Obstacles come from three fixed rings of [`POOL_SIZE`] slots: the obstacle
//! itself (box, rail or grid stick), the grid flag drawn over a stick, and the
//! invisible pickup strip behind every obstacle. Spawning into a slot first
//! destroys whatever still occupies it, which bounds the number of live
//! obstacle entities no matter how long a run lasts.

use bevy_ecs::prelude::{Entity, Resource};

use crate::constants::{
    DIFFICULTY_PERIOD, INITIAL_OBSTACLE_SPEED, INITIAL_SPAWN_DIVISOR, INITIAL_SPAWN_RATE,
    POOL_SIZE,
};

/// Which ring a spawned entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Obstacle,
    GridFlag,
    Pickup,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ObstacleSpawner {
    /// Ticks between spawns.
    pub spawn_rate: u32,
    pub divisor: u32,
    /// Scroll speed given to newly spawned obstacles.
    pub initial_speed: i32,
    /// Local tick counter, reset at every checkpoint.
    pub frame: u32,
    /// Ring slot used by the latest spawn.
    pub cursor: usize,
    obstacles: [Option<Entity>; POOL_SIZE],
    grid_flags: [Option<Entity>; POOL_SIZE],
    pickups: [Option<Entity>; POOL_SIZE],
}

impl Default for ObstacleSpawner {
    fn default() -> Self {
        ObstacleSpawner {
            spawn_rate: INITIAL_SPAWN_RATE,
            divisor: INITIAL_SPAWN_DIVISOR,
            initial_speed: INITIAL_OBSTACLE_SPEED,
            frame: 0,
            cursor: 0,
            obstacles: [None; POOL_SIZE],
            grid_flags: [None; POOL_SIZE],
            pickups: [None; POOL_SIZE],
        }
    }
}

impl ObstacleSpawner {
    /// Advance the local clock. Returns true when something should spawn
    /// this tick, in which case the cursor has moved to the slot to use.
    pub fn advance(&mut self) -> bool {
        self.frame += 1;
        if self.frame % DIFFICULTY_PERIOD as u32 == 0 {
            let step = (self.spawn_rate as f32 / self.divisor as f32).round() as u32;
            // never below one tick
            self.spawn_rate = self.spawn_rate.saturating_sub(step).max(1);
            self.divisor += 1;
            self.frame = 1;
            self.initial_speed = -(self.divisor as i32);
            log::debug!(
                "Spawner ramp: rate={} speed={}",
                self.spawn_rate,
                self.initial_speed
            );
        }
        if self.frame % self.spawn_rate == 0 {
            self.cursor = (self.cursor + 1) % POOL_SIZE;
            true
        } else {
            false
        }
    }

    fn ring_mut(&mut self, slot: Slot) -> &mut [Option<Entity>; POOL_SIZE] {
        match slot {
            Slot::Obstacle => &mut self.obstacles,
            Slot::GridFlag => &mut self.grid_flags,
            Slot::Pickup => &mut self.pickups,
        }
    }

    /// Empty the current slot of `slot`'s ring, returning its previous occupant.
    pub fn evict(&mut self, slot: Slot) -> Option<Entity> {
        let cursor = self.cursor;
        self.ring_mut(slot)[cursor].take()
    }

    /// Record `entity` in the current slot of `slot`'s ring.
    pub fn occupy(&mut self, slot: Slot, entity: Entity) {
        let cursor = self.cursor;
        self.ring_mut(slot)[cursor] = Some(entity);
    }

    pub fn occupant(&self, slot: Slot, index: usize) -> Option<Entity> {
        let ring = match slot {
            Slot::Obstacle => &self.obstacles,
            Slot::GridFlag => &self.grid_flags,
            Slot::Pickup => &self.pickups,
        };
        ring.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_spawn_happens_at_the_spawn_rate() {
        let mut s = ObstacleSpawner::default();
        for _ in 1..INITIAL_SPAWN_RATE {
            assert!(!s.advance());
        }
        assert!(s.advance());
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn checkpoint_speeds_up_spawning() {
        let mut s = ObstacleSpawner::default();
        for _ in 0..DIFFICULTY_PERIOD {
            s.advance();
        }
        // 350 - round(350 / 3)
        assert_eq!(s.spawn_rate, 233);
        assert_eq!(s.divisor, 4);
        assert_eq!(s.initial_speed, -4);
        assert_eq!(s.frame, 1);
    }

    #[test]
    fn rate_never_increases_and_stays_positive() {
        let mut s = ObstacleSpawner::default();
        let mut last = s.spawn_rate;
        for _ in 0..50_000 {
            s.advance();
            assert!(s.spawn_rate <= last);
            assert!(s.spawn_rate >= 1);
            last = s.spawn_rate;
        }
    }

    #[test]
    fn cursor_wraps_around_the_ring() {
        let mut s = ObstacleSpawner::default();
        let mut cursors = Vec::new();
        while cursors.len() < POOL_SIZE + 1 {
            if s.advance() {
                cursors.push(s.cursor);
            }
        }
        assert_eq!(cursors, vec![1, 2, 3, 0, 1]);
    }
}
