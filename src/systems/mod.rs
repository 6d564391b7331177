//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation and
//! describe what to render, plus the raylib host glue.
//!
//! The gameplay pipeline runs in this order every tick (see
//! [`crate::game::build_gameplay_world`]):
//!
//! 1. [`obstacles::obstacle_generator`]
//! 2. [`playerinput::player_input`]
//! 3. [`movement::movement`]
//! 4. [`movement::speed_ramp`]
//! 5. [`jump::jump_system`]
//! 6. [`rail::rail_exit`]
//! 7. [`collision::collision_detector`]
//! 8. [`collision::player_collision_response`]
//! 9. [`grace::grace_system`]
//! 10. [`gameover::game_over_check`]
//! 11. [`background::background_wrap`]
//!
//! Submodules overview
//! - [`background`] – wrap scrolling backgrounds around
//! - [`collision`] – pairwise detection and the player's collision response
//! - [`draw`] – turn sprites and labels into draw commands
//! - [`gameover`] – raise the game over flag when the player is gone
//! - [`grace`] – blink and restore the player after a lost life
//! - `input` – read raylib keyboard state into [`crate::resources::input::InputState`]
//! - [`jump`] – jump arcs, spins and landings
//! - [`movement`] – scroll entities and ramp their speed
//! - [`obstacles`] – spawn obstacles and pickups
//! - [`playerinput`] – walking, jumping and crouching
//! - [`rail`] – leave a rail once it has passed
//! - `render` – draw the draw queue with raylib
//! - [`time`] – advance the simulation frame counter

pub mod background;
pub mod collision;
pub mod draw;
pub mod gameover;
pub mod grace;
#[cfg(feature = "raylib")]
pub mod input;
pub mod jump;
pub mod movement;
pub mod obstacles;
pub mod playerinput;
pub mod rail;
#[cfg(feature = "raylib")]
pub mod render;
pub mod time;
