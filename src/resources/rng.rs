use bevy_ecs::prelude::Resource;

/// Random source for obstacle selection.
///
/// Seeded from [`GameConfig::seed`](crate::resources::gameconfig::GameConfig)
/// when one is configured, so runs can be replayed.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng(fastrand::Rng::with_seed(seed)),
            None => GameRng(fastrand::Rng::new()),
        }
    }

    /// Uniform integer in `[0, bound)`.
    pub fn roll(&mut self, bound: u32) -> u32 {
        self.0.u32(0..bound)
    }
}
