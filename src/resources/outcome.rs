use bevy_ecs::prelude::Resource;

/// How the current run ended, if it did.
///
/// `final_score` is written when the last life is lost; `game_over` is raised
/// by the game over check once the player entity is gone.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub game_over: bool,
    pub final_score: u32,
}
