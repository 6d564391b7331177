//! ECS resources made available to systems.
//!
//! Each [`GameWorld`](crate::gameworld::GameWorld) owns its own copy of the
//! simulation resources, so rebuilding a world resets them all.
//!
//! Overview
//! - `drawqueue` – draw commands produced by render systems for the host
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – current game mode and its transition rules
//! - `grace` – invulnerability countdown after a life is lost
//! - `input` – keyboard state of the keys relevant to the game
//! - `jumptuning` – jump height, length and spin, with their difficulty ramp
//! - `obstaclespawner` – obstacle generator clock and entity rings
//! - `outcome` – game over flag and final score of a run
//! - `rng` – seedable random source
//! - `screensize` – canvas dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs (raylib builds only)
//! - `worldtime` – simulation frame counter
pub mod drawqueue;
pub mod gameconfig;
pub mod gamestate;
pub mod grace;
pub mod input;
pub mod jumptuning;
pub mod obstaclespawner;
pub mod outcome;
pub mod rng;
pub mod screensize;
#[cfg(feature = "raylib")]
pub mod texturestore;
pub mod worldtime;
