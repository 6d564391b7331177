//! High-level game state.
//!
//! [`GameState`] tracks which mode the game is in. Transitions are computed by
//! [`GameStates::next`] from key edges and the gameplay world's outcome, then
//! applied by [`Game`](crate::game::Game), which decides from
//! [`GameStates::rebuilds_world`] whether the target mode starts from a fresh
//! world.

use crate::resources::input::{InputState, Key};

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    MainMenu,
    Gameplay,
    Pause,
    GameOver,
    HighScores,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

impl GameStates {
    /// Work out the transition for this frame.
    ///
    /// Only `Pressed` edges trigger a transition, and the edge that does is
    /// consumed. `run_over` is the gameplay world's game over flag.
    pub fn next(self, input: &mut InputState, run_over: bool) -> NextGameStates {
        use GameStates::*;
        let target = match self {
            MainMenu | GameOver => {
                if input.take_press(Key::H) {
                    Some(HighScores)
                } else if input.take_press(Key::Enter) {
                    Some(Gameplay)
                } else {
                    None
                }
            }
            Gameplay => {
                if input.take_press(Key::Escape) {
                    Some(Pause)
                } else if run_over {
                    Some(GameOver)
                } else {
                    None
                }
            }
            HighScores => input.take_press(Key::H).then_some(MainMenu),
            Pause => {
                if input.take_press(Key::Enter) {
                    Some(Gameplay)
                } else if input.take_press(Key::Escape) {
                    Some(MainMenu)
                } else {
                    None
                }
            }
        };
        match target {
            Some(state) => NextGameStates::Pending(state),
            None => NextGameStates::Unchanged,
        }
    }

    /// Entering `to` from `self` starts over with a new world, except when
    /// pausing or resuming, which keep the gameplay world as it is.
    pub fn rebuilds_world(self, to: GameStates) -> bool {
        !matches!(
            (self, to),
            (GameStates::Gameplay, GameStates::Pause) | (GameStates::Pause, GameStates::Gameplay)
        )
    }

    /// Whether simulation ticks run in this state.
    pub fn simulates(self) -> bool {
        self != GameStates::Pause
    }
}

/// Authoritative current game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::MainMenu`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::MainMenu,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}
