//! Bober Rider main entry point.
//!
//! A side-scrolling skate game: a beaver rides to the right, jumping boxes,
//! grinding rails and ducking under grid flags. Built with:
//! - **bevy_ecs** for the entity-component-system simulation
//! - **raylib** for windowing, textures, keyboard and drawing (feature `raylib`)
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and open the window
//! 2. Load every texture the game uses
//! 3. Each host frame:
//!    - Poll the keyboard into the game's input state
//!    - Let [`Game::frame`](bober_rider::game::Game::frame) switch modes and
//!      run a simulation tick when one is due
//!    - Draw the returned draw commands
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bober_rider::resources::gameconfig::GameConfig;
use clap::Parser;
use std::path::PathBuf;

/// Bober Rider
#[derive(Parser)]
#[command(
    version,
    about = "Ride, jump and grind past boxes, rails and grids. Arrows move, SPACE jumps, CTRL crouches."
)]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for obstacle selection, overrides the config file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("{e}, using defaults");
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Early-exit: write the config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    run(config);
}

#[cfg(feature = "raylib")]
fn run(config: GameConfig) {
    use bober_rider::game::Game;
    use bober_rider::resources::texturestore::TextureStore;
    use bober_rider::systems::input::poll_keyboard;
    use bober_rider::systems::render::render_commands;

    log::info!("Hello, world! This is Bober Rider!");
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Bober Rider")
        .build();
    rl.set_target_fps(config.target_fps);
    // ESC pauses the game instead of closing the window
    rl.set_exit_key(None);

    let textures = match TextureStore::load_all(&mut rl, &thread) {
        Ok(textures) => textures,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut game = Game::new(&config);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        poll_keyboard(&rl, game.input_mut());
        let now_ms = rl.get_time() * 1000.0;
        let commands = game.frame(now_ms);

        let mut d = rl.begin_drawing(&thread);
        render_commands(&mut d, &textures, &commands);
    }
}

#[cfg(not(feature = "raylib"))]
fn run(_config: GameConfig) {
    log::error!("This build has no window support, rebuild with `--features raylib`");
    std::process::exit(1);
}
