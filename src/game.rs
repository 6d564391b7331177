//! Game modes and the fixed-step game loop.
//!
//! Every mode (main menu, gameplay, game over, high scores) lives in its own
//! [`GameWorld`], built by the `build_*_world` functions below. [`Game`] owns
//! the four worlds and the current [`GameState`], applies mode transitions,
//! runs simulation ticks at a fixed rate and renders the active world every
//! host frame.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::collision::{Collision, ObstacleType};
use crate::components::group;
use crate::components::jump::Jump;
use crate::components::lives::Lives;
use crate::components::motion::Move;
use crate::components::playercontrolled::{PlayerControlled, Pose};
use crate::components::position::Position;
use crate::components::score::{Score, ScoreBind};
use crate::components::visual::Visual;
use crate::components::zindex::ZIndex;
use crate::constants::*;
use crate::gameworld::GameWorld;
use crate::resources::drawqueue::DrawCommand;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameStates};
use crate::resources::grace::GraceWindow;
use crate::resources::input::InputState;
use crate::resources::jumptuning::JumpTuning;
use crate::resources::obstaclespawner::ObstacleSpawner;
use crate::resources::outcome::RunOutcome;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::systems::background::background_wrap;
use crate::systems::collision::{collision_detector, player_collision_response};
use crate::systems::draw::{draw_result, draw_score, draw_sprites};
use crate::systems::gameover::game_over_check;
use crate::systems::grace::grace_system;
use crate::systems::jump::jump_system;
use crate::systems::movement::{movement, speed_ramp};
use crate::systems::obstacles::obstacle_generator;
use crate::systems::playerinput::player_input;
use crate::systems::rail::rail_exit;

/// A world showing a single full-canvas picture.
fn build_backdrop_world(screen: ScreenSize, tex_key: &'static str) -> GameWorld {
    let mut gw = GameWorld::new();
    gw.world.insert_resource(screen);
    gw.spawn(
        group::BACKGROUND,
        (
            Position::new(0.0, 0.0),
            Visual::new(tex_key, screen.width(), screen.height()),
            ZIndex(Z_BACKGROUND),
        ),
    );
    gw.add_render_systems(draw_sprites);
    gw
}

pub fn build_menu_world(screen: ScreenSize) -> GameWorld {
    build_backdrop_world(screen, tex::START)
}

pub fn build_high_scores_world(screen: ScreenSize) -> GameWorld {
    build_backdrop_world(screen, tex::HIGH_SCORES)
}

/// The game over screen, showing `result`.
pub fn build_game_over_world(screen: ScreenSize, result: u32) -> GameWorld {
    let mut gw = GameWorld::new();
    gw.world.insert_resource(screen);
    gw.spawn(
        group::BACKGROUND,
        (
            Position::new(0.0, 0.0),
            Visual::new(tex::GAME_OVER, screen.width(), screen.height()),
            ZIndex(Z_BACKGROUND),
        ),
    );
    gw.spawn(
        group::RESULT,
        (
            Position::new(RESULT_POSITION_X, RESULT_POSITION_Y),
            Score::new(result),
        ),
    );
    gw.add_render_systems((draw_sprites, draw_result).chain());
    gw
}

/// A fresh run: scrolling backgrounds, the HUD, the player and the full
/// simulation pipeline.
pub fn build_gameplay_world(screen: ScreenSize, seed: Option<u64>) -> GameWorld {
    let mut gw = GameWorld::new();
    gw.world.insert_resource(screen);
    gw.world.insert_resource(InputState::default());
    gw.world.insert_resource(JumpTuning::default());
    gw.world.insert_resource(ObstacleSpawner::default());
    gw.world.insert_resource(GraceWindow::default());
    gw.world.insert_resource(RunOutcome::default());
    gw.world.insert_resource(GameRng::new(seed));

    let (w, h) = (screen.width(), screen.height());
    for x in [0.0, w] {
        gw.spawn(
            group::BACKGROUND,
            (
                Position::new(x, 0.0),
                Visual::new(tex::BACKGROUND, w, h),
                Move::new(BACKGROUND_SPEED),
                ZIndex(Z_BACKGROUND),
            ),
        );
    }

    let hearts: Vec<Entity> = HEART_OFFSETS_FROM_RIGHT
        .iter()
        .filter_map(|offset| {
            gw.spawn(
                group::LIFE,
                (
                    Position::new(w - offset, HEART_POSITION_Y),
                    Visual::new(tex::HEART, HEART_SIZE, HEART_SIZE),
                    ZIndex(Z_HUD),
                ),
            )
        })
        .collect();

    let (pw, ph) = PLAYER_DEFAULT_SIZE;
    let player = gw.spawn(
        group::PLAYER,
        (
            Position::new(PLAYER_DEFAULT_X, PLAYER_DEFAULT_Y),
            Pose::Stand.visual(),
            Jump::default(),
            PlayerControlled::new(PLAYER_NAME),
            Collision::new(pw, ph, ObstacleType::Player),
            Lives::new(hearts),
            Score::new(0),
            ZIndex(Z_PLAYER),
        ),
    );
    if let Some(player) = player {
        gw.spawn(
            group::SCORE_LABEL,
            (
                Position::new(w - SCORE_LABEL_FROM_RIGHT, h - SCORE_LABEL_FROM_BOTTOM),
                ScoreBind { target: player },
            ),
        );
    }

    gw.add_systems(
        (
            obstacle_generator,
            player_input,
            movement,
            speed_ramp,
            jump_system,
            rail_exit,
            collision_detector,
            player_collision_response,
            grace_system,
            game_over_check,
            background_wrap,
        )
            .chain(),
    );
    gw.add_render_systems((draw_sprites, draw_score).chain());
    gw
}

/// The whole game: one world per mode and the mode state machine.
pub struct Game {
    state: GameState,
    menu: GameWorld,
    gameplay: GameWorld,
    game_over: GameWorld,
    high_scores: GameWorld,
    input: InputState,
    screen: ScreenSize,
    seeds: fastrand::Rng,
    timestep_ms: f64,
    last_tick_ms: f64,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let screen = ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        };
        let seeds = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Game {
            state: GameState::new(),
            menu: build_menu_world(screen),
            gameplay: GameWorld::new(),
            game_over: GameWorld::new(),
            high_scores: GameWorld::new(),
            input: InputState::default(),
            screen,
            seeds,
            timestep_ms: config.timestep_ms(),
            last_tick_ms: 0.0,
        }
    }

    pub fn state(&self) -> GameStates {
        self.state.get()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Keyboard state fed by the host between frames.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The world a mode runs in. Pause shows the paused gameplay world.
    pub fn world(&self, state: GameStates) -> &GameWorld {
        match state {
            GameStates::MainMenu => &self.menu,
            GameStates::Gameplay | GameStates::Pause => &self.gameplay,
            GameStates::GameOver => &self.game_over,
            GameStates::HighScores => &self.high_scores,
        }
    }

    pub fn world_mut(&mut self, state: GameStates) -> &mut GameWorld {
        match state {
            GameStates::MainMenu => &mut self.menu,
            GameStates::Gameplay | GameStates::Pause => &mut self.gameplay,
            GameStates::GameOver => &mut self.game_over,
            GameStates::HighScores => &mut self.high_scores,
        }
    }

    fn run_over(&self) -> bool {
        self.gameplay
            .world
            .get_resource::<RunOutcome>()
            .is_some_and(|outcome| outcome.game_over)
    }

    /// Check key edges and the run outcome, switching mode if needed.
    pub fn update_state(&mut self) {
        let current = self.state.get();
        let run_over = self.run_over();
        if let NextGameStates::Pending(next) = current.next(&mut self.input, run_over) {
            self.enter(next);
        }
    }

    fn enter(&mut self, next: GameStates) {
        let current = self.state.get();
        info!("Game state {:?} -> {:?}", current, next);
        if current.rebuilds_world(next) {
            match next {
                GameStates::MainMenu => self.menu = build_menu_world(self.screen),
                GameStates::Gameplay => {
                    let seed = self.seeds.u64(..);
                    self.gameplay = build_gameplay_world(self.screen, Some(seed));
                }
                GameStates::GameOver => {
                    let result = self
                        .gameplay
                        .world
                        .get_resource::<RunOutcome>()
                        .map_or(0, |outcome| outcome.final_score);
                    self.game_over = build_game_over_world(self.screen, result);
                }
                GameStates::HighScores => {
                    self.high_scores = build_high_scores_world(self.screen)
                }
                GameStates::Pause => {}
            }
        }
        self.state.set(next);
    }

    /// Run one simulation tick of the active world.
    ///
    /// The keyboard state is lent to the world for the duration of the tick
    /// so systems can consume key edges.
    pub fn tick(&mut self) {
        let state = self.state.get();
        if !state.simulates() {
            return;
        }
        let input = std::mem::take(&mut self.input);
        let gw = self.world_mut(state);
        gw.world.insert_resource(input);
        gw.tick();
        let input = gw.world.remove_resource::<InputState>().unwrap_or_default();
        self.input = input;
    }

    /// Draw commands for the active world.
    pub fn render(&mut self) -> Vec<DrawCommand> {
        let gw = self.world_mut(self.state.get());
        gw.run_render_systems();
        gw.take_draw_commands().into_vec()
    }

    /// One host frame at time `now_ms`.
    ///
    /// Applies state transitions, runs a simulation tick if more than one
    /// timestep has passed since the last tick and the game is not paused,
    /// then renders.
    pub fn frame(&mut self, now_ms: f64) -> Vec<DrawCommand> {
        self.update_state();
        if now_ms > self.last_tick_ms + self.timestep_ms && self.state.get().simulates() {
            self.tick();
            self.last_tick_ms = now_ms;
        }
        self.render()
    }
}
