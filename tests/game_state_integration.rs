//! Mode switching, world rebuilds and fixed-step pacing of [`Game`].

use bevy_ecs::prelude::*;

use bober_rider::components::collision::{Collision, ObstacleType};
use bober_rider::components::group;
use bober_rider::components::lives::Lives;
use bober_rider::components::playercontrolled::PlayerControlled;
use bober_rider::components::position::Position;
use bober_rider::components::score::Score;
use bober_rider::components::visual::Visual;
use bober_rider::constants::*;
use bober_rider::game::Game;
use bober_rider::gameworld::GameWorld;
use bober_rider::resources::drawqueue::{DrawCommand, TextColor};
use bober_rider::resources::gameconfig::GameConfig;
use bober_rider::resources::gamestate::GameStates;
use bober_rider::resources::input::Key;

fn make_game() -> Game {
    let mut config = GameConfig::new();
    config.seed = Some(42);
    Game::new(&config)
}

fn press(game: &mut Game, key: Key) {
    let input = game.input_mut();
    input.press(key);
    input.release(key);
    input.press(key);
}

fn first_texture(commands: &[DrawCommand]) -> Option<&'static str> {
    commands.iter().find_map(|c| match c {
        DrawCommand::Sprite { tex_key, .. } => Some(*tex_key),
        DrawCommand::Text { .. } => None,
    })
}

fn player_of(gw: &mut GameWorld) -> Option<Entity> {
    gw.world
        .query_filtered::<Entity, With<PlayerControlled>>()
        .iter(&gw.world)
        .next()
}

#[test]
fn starts_on_the_main_menu() {
    let mut game = make_game();
    assert_eq!(game.state(), GameStates::MainMenu);
    let commands = game.frame(0.0);
    assert_eq!(first_texture(&commands), Some(tex::START));
}

#[test]
fn menu_to_high_scores_and_back() {
    let mut game = make_game();
    press(&mut game, Key::H);
    let commands = game.frame(1.0);
    assert_eq!(game.state(), GameStates::HighScores);
    assert_eq!(first_texture(&commands), Some(tex::HIGH_SCORES));

    // Enter does nothing here
    press(&mut game, Key::Enter);
    game.frame(2.0);
    assert_eq!(game.state(), GameStates::HighScores);

    press(&mut game, Key::H);
    game.frame(3.0);
    assert_eq!(game.state(), GameStates::MainMenu);
}

#[test]
fn h_wins_over_enter_on_the_menu() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    press(&mut game, Key::H);
    game.frame(1.0);
    assert_eq!(game.state(), GameStates::HighScores);
}

#[test]
fn ticks_follow_the_fixed_timestep() {
    let mut game = make_game();
    press(&mut game, Key::Enter);

    game.frame(5.0);
    assert_eq!(game.state(), GameStates::Gameplay);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 0);

    // strictly more than one 10 ms step must pass
    game.frame(10.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 0);
    game.frame(11.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 1);
    game.frame(15.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 1);
    // a slow host frame still runs a single tick
    game.frame(100.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 2);
}

#[test]
fn pause_freezes_and_resume_continues_the_same_run() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    game.frame(11.0);
    game.frame(22.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 2);

    press(&mut game, Key::Escape);
    let paused = game.frame(40.0);
    assert_eq!(game.state(), GameStates::Pause);
    // the frozen run is still on screen
    assert_eq!(first_texture(&paused), Some(tex::BACKGROUND));
    game.frame(100.0);
    game.frame(200.0);
    assert_eq!(game.world(GameStates::Pause).frame(), 2);

    press(&mut game, Key::Enter);
    game.frame(300.0);
    assert_eq!(game.state(), GameStates::Gameplay);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 3);
}

#[test]
fn escape_from_pause_returns_to_the_menu_and_restarts() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    game.frame(11.0);
    game.frame(22.0);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 2);
    press(&mut game, Key::Escape);
    game.frame(30.0);
    press(&mut game, Key::Escape);
    let commands = game.frame(50.0);
    assert_eq!(game.state(), GameStates::MainMenu);
    assert_eq!(first_texture(&commands), Some(tex::START));

    press(&mut game, Key::Enter);
    game.frame(60.0);
    assert_eq!(game.state(), GameStates::Gameplay);
    assert_eq!(game.world(GameStates::Gameplay).frame(), 0);
}

#[test]
fn losing_the_last_life_shows_the_result() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    game.frame(1.0);

    let gw = game.world_mut(GameStates::Gameplay);
    let player = player_of(gw).unwrap();
    gw.world.get_mut::<Score>(player).unwrap().value = 7;
    // two hearts already gone
    for _ in 0..2 {
        let heart = gw.world.get_mut::<Lives>(player).unwrap().pop().unwrap();
        gw.destroy(heart);
    }
    gw.spawn(
        group::OBSTACLE,
        (
            Position::new(PLAYER_DEFAULT_X, BOX_POSITION_Y),
            Visual::new(tex::BOX, BOX_WIDTH, BOX_HEIGHT),
            Collision::new(BOX_WIDTH, BOX_HEIGHT, ObstacleType::Box),
        ),
    )
    .unwrap();

    game.frame(20.0);
    assert_eq!(game.state(), GameStates::Gameplay);
    assert!(player_of(game.world_mut(GameStates::Gameplay)).is_none());

    let commands = game.frame(25.0);
    assert_eq!(game.state(), GameStates::GameOver);
    assert_eq!(first_texture(&commands), Some(tex::GAME_OVER));
    assert!(commands.contains(&DrawCommand::Text {
        text: "Your score: 7".to_string(),
        x: RESULT_POSITION_X,
        y: RESULT_POSITION_Y,
        size: RESULT_FONT_SIZE,
        color: TextColor::White,
    }));

    // a new run starts from scratch
    press(&mut game, Key::Enter);
    game.frame(30.0);
    assert_eq!(game.state(), GameStates::Gameplay);
    let gw = game.world_mut(GameStates::Gameplay);
    let player = player_of(gw).unwrap();
    assert_eq!(gw.get::<Lives>(player).unwrap().count(), STARTING_LIVES);
    assert_eq!(gw.get::<Score>(player).unwrap().value, 0);
}

#[test]
fn game_over_leads_to_high_scores_then_the_menu() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    game.frame(1.0);

    let gw = game.world_mut(GameStates::Gameplay);
    let player = player_of(gw).unwrap();
    gw.destroy(player);
    game.frame(20.0);
    game.frame(25.0);
    assert_eq!(game.state(), GameStates::GameOver);

    press(&mut game, Key::H);
    let commands = game.frame(30.0);
    assert_eq!(game.state(), GameStates::HighScores);
    assert_eq!(first_texture(&commands), Some(tex::HIGH_SCORES));

    press(&mut game, Key::H);
    let commands = game.frame(40.0);
    assert_eq!(game.state(), GameStates::MainMenu);
    assert_eq!(first_texture(&commands), Some(tex::START));
}

#[test]
fn key_edges_reach_the_gameplay_world() {
    let mut game = make_game();
    press(&mut game, Key::Enter);
    game.frame(1.0);
    press(&mut game, Key::Space);
    game.frame(20.0);

    let gw = game.world_mut(GameStates::Gameplay);
    let player = player_of(gw).unwrap();
    assert!(gw.get::<PlayerControlled>(player).unwrap().state.is_jumping());
    // the edge was consumed by the tick
    assert!(!game.input_mut().take_press(Key::Space));
}
