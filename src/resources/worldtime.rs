use bevy_ecs::prelude::Resource;

/// Simulation clock of one world.
///
/// `frame` counts simulation ticks since the world was built and is advanced
/// by [`GameWorld::tick`](crate::gameworld::GameWorld::tick) before the
/// systems run, so the first tick sees frame 1.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTime {
    pub frame: u64,
}

impl WorldTime {
    /// True on the ticks where the difficulty ramps up.
    pub fn is_checkpoint(&self, period: u64) -> bool {
        self.frame % period == 0
    }
}
