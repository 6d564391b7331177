use bevy_ecs::prelude::*;

use crate::components::playercontrolled::PlayerControlled;
use crate::resources::outcome::RunOutcome;

/// Raise the game over flag once no player entity is left.
pub fn game_over_check(
    players: Query<(), With<PlayerControlled>>,
    mut outcome: ResMut<RunOutcome>,
) {
    if players.is_empty() && !outcome.game_over {
        outcome.game_over = true;
        log::info!("Game over, final score {}", outcome.final_score);
    }
}
