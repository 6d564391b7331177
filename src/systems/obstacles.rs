//! Obstacle generator.
//!
//! Runs first in the pipeline. On spawn ticks it picks one of three obstacle
//! kinds with equal odds and places it just beyond the right edge of the
//! canvas, together with an invisible pickup strip a little behind it that
//! scores a point when the player crosses it.
//!
//! | Roll        | Spawns                                   |
//! |-------------|------------------------------------------|
//! | `< 333`     | box                                      |
//! | `< 666`     | grid flag over a grid stick              |
//! | otherwise   | rail                                     |

use bevy_ecs::prelude::*;

use crate::components::collision::{Collision, GridLink, ObstacleType};
use crate::components::group;
use crate::components::motion::Move;
use crate::components::position::Position;
use crate::components::visual::Visual;
use crate::components::zindex::ZIndex;
use crate::constants::*;
use crate::gameworld::WorldExt;
use crate::resources::obstaclespawner::{ObstacleSpawner, Slot};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;

/// Where a spawned obstacle starts, measured from the obstacle's centre.
fn spawn_x(screen: &ScreenSize) -> f32 {
    screen.width() + 250.0
}

/// Everything an obstacle entity is made of, minus its group tag.
fn obstacle_bundle(
    x: f32,
    y: f32,
    visual: Visual,
    collision: Collision,
    speed: i32,
    z: i32,
) -> (Position, Visual, Move, Collision, ZIndex) {
    (
        Position::new(x, y),
        visual,
        Move::new(speed),
        collision,
        ZIndex(z),
    )
}

/// Spawn into the current slot of a ring, destroying its previous occupant.
fn spawn_into<B: Bundle>(
    world: &mut World,
    slot: Slot,
    group: &'static str,
    bundle: B,
) -> Option<Entity> {
    if let Some(old) = world.resource_mut::<ObstacleSpawner>().evict(slot) {
        world.destroy(old);
    }
    let entity = world.spawn_bounded(group, bundle)?;
    world.resource_mut::<ObstacleSpawner>().occupy(slot, entity);
    Some(entity)
}

fn spawn_pickup(world: &mut World, x: f32, screen: &ScreenSize, speed: i32) {
    spawn_into(
        world,
        Slot::Pickup,
        group::PICKUP,
        obstacle_bundle(
            x,
            0.0,
            Visual::hidden(tex::HEART, SCORE_POINT_WIDTH, screen.height()),
            Collision::new(SCORE_POINT_WIDTH, screen.height(), ObstacleType::ScorePoint),
            speed,
            Z_OBSTACLE,
        ),
    );
}

fn spawn_box(world: &mut World, screen: &ScreenSize, speed: i32) {
    let x = spawn_x(screen) - BOX_WIDTH / 2.0;
    spawn_into(
        world,
        Slot::Obstacle,
        group::OBSTACLE,
        obstacle_bundle(
            x,
            BOX_POSITION_Y,
            Visual::new(tex::BOX, BOX_WIDTH, BOX_HEIGHT),
            Collision::new(BOX_WIDTH, BOX_HEIGHT, ObstacleType::Box),
            speed,
            Z_OBSTACLE,
        ),
    );
    spawn_pickup(world, x + BOX_PICKUP_OFFSET, screen, speed);
}

fn spawn_grid(world: &mut World, screen: &ScreenSize, speed: i32) {
    let x = spawn_x(screen) - GRID_WIDTH / 2.0;
    let stick = spawn_into(
        world,
        Slot::Obstacle,
        group::OBSTACLE,
        obstacle_bundle(
            x,
            GRID_POSITION_Y,
            Visual::new(tex::GRID_STICK, GRID_WIDTH, GRID_HEIGHT),
            Collision::new(GRID_WIDTH, GRID_HEIGHT, ObstacleType::GridStick),
            speed,
            Z_OBSTACLE,
        ),
    );
    if let Some(stick) = stick {
        spawn_into(
            world,
            Slot::GridFlag,
            group::GRID_FLAG,
            (
                obstacle_bundle(
                    x,
                    GRID_POSITION_Y,
                    Visual::new(tex::GRID, GRID_WIDTH, GRID_HEIGHT),
                    Collision::new(GRID_WIDTH, GRID_HEIGHT, ObstacleType::Grid),
                    speed,
                    Z_GRID_FLAG,
                ),
                GridLink { stick },
            ),
        );
    }
    spawn_pickup(world, x + GRID_PICKUP_OFFSET, screen, speed);
}

fn spawn_rail(world: &mut World, screen: &ScreenSize, speed: i32) {
    let x = spawn_x(screen) - RAIL_WIDTH / 2.0;
    spawn_into(
        world,
        Slot::Obstacle,
        group::OBSTACLE,
        obstacle_bundle(
            x,
            RAIL_POSITION_Y,
            Visual::new(tex::RAIL, RAIL_WIDTH, RAIL_HEIGHT),
            Collision::new(RAIL_WIDTH - RAIL_COLLIDER_TRIM, RAIL_HEIGHT, ObstacleType::Rail),
            speed,
            Z_OBSTACLE,
        ),
    );
    spawn_pickup(world, x + RAIL_PICKUP_OFFSET, screen, speed);
}

/// Advance the generator clock and spawn an obstacle when it is due.
pub fn obstacle_generator(world: &mut World) {
    if !world.resource_mut::<ObstacleSpawner>().advance() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();
    let speed = world.resource::<ObstacleSpawner>().initial_speed;
    let roll = world.resource_mut::<GameRng>().roll(SPAWN_ROLL_RANGE);

    if roll < SPAWN_ROLL_BOX {
        spawn_box(world, &screen, speed);
    } else if roll < SPAWN_ROLL_GRID {
        spawn_grid(world, &screen, speed);
    } else {
        spawn_rail(world, &screen, speed);
    }
}
