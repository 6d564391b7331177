//! Collision detection and the player's response to it.
//!
//! [`collision_detector`] tests every pair of collidable entities and writes
//! a [`CollisionEvent`] for each side of an intersecting pair.
//! [`player_collision_response`] drains those messages and applies the rules
//! for whatever the player ran into:
//!
//! | Obstacle                    | Effect                                          |
//! |-----------------------------|-------------------------------------------------|
//! | pickup                      | +1 score, pickup removed                        |
//! | box                         | life lost, box left broken                      |
//! | rail, player on the ground  | life lost                                       |
//! | rail, player airborne       | player grinds the rail                          |
//! | grid flag, not crouching    | life lost, flag torn off, stick left broken     |
//! | grid flag, crouching        | nothing, the player passes under                |

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::collision::{Collision, GridLink, ObstacleType};
use crate::components::lives::Lives;
use crate::components::playercontrolled::{PlayerControlled, PlayerState, Pose, RidingRail};
use crate::components::position::Position;
use crate::components::score::Score;
use crate::components::visual::Visual;
use crate::constants::{
    BOX_BROKEN_GROWTH, BOX_HEIGHT, BOX_WIDTH, GRID_HEIGHT, GRID_WIDTH, PLAYER_DEFAULT_Y,
    SLIDING_ON_RAIL_Y, tex,
};
use crate::events::collision::CollisionEvent;
use crate::gameworld::WorldExt;
use crate::geometry::{CollisionType, RotatedRect, collision_type};
use crate::resources::outcome::RunOutcome;

pub fn collision_detector(
    query: Query<(Entity, &Position, &Visual, &Collision)>,
    mut writer: MessageWriter<CollisionEvent>,
) {
    for [(entity_a, pos_a, vis_a, col_a), (entity_b, pos_b, vis_b, col_b)] in
        query.iter_combinations()
    {
        let kind = collision_type(
            &RotatedRect::from_entity(pos_a, vis_a),
            &RotatedRect::from_entity(pos_b, vis_b),
        );
        if kind == CollisionType::None {
            continue;
        }
        writer.write(CollisionEvent {
            entity: entity_a,
            other: entity_b,
            kind,
            other_obstacle: col_b.obstacle,
        });
        writer.write(CollisionEvent {
            entity: entity_b,
            other: entity_a,
            kind,
            other_obstacle: col_a.obstacle,
        });
    }
}

/// Take one life from `player` because it hit `obstacle`.
///
/// The last life ends the run: the score is recorded as the result and the
/// player is destroyed. Otherwise the player and the obstacle stop colliding,
/// which starts the player's grace window. Returns true if the player died.
pub fn remove_life_or_kill(world: &mut World, player: Entity, obstacle: Entity) -> bool {
    let Some(mut lives) = world.get_mut::<Lives>(player) else {
        return false;
    };
    let heart = lives.pop();
    let remaining = lives.count();
    if let Some(heart) = heart {
        world.destroy(heart);
    }

    if remaining == 0 {
        let score = world.get::<Score>(player).map_or(0, |s| s.value);
        world.resource_mut::<RunOutcome>().final_score = score;
        world.destroy(player);
        log::info!("Last life lost, score {score}");
        true
    } else {
        world.detach::<(Collision, RidingRail)>(player);
        world.detach::<Collision>(obstacle);
        log::debug!("Life lost, {remaining} left");
        false
    }
}

/// Put a player that survived a hit back on the ground.
fn ground_player(world: &mut World, player: Entity) {
    if let Some(mut pc) = world.get_mut::<PlayerControlled>(player) {
        pc.state = PlayerState::Idle;
    }
    if let Some(mut position) = world.get_mut::<Position>(player) {
        position.y = PLAYER_DEFAULT_Y;
    }
    world.attach(player, Pose::Stand.visual());
}

fn hit(world: &mut World, player: Entity, obstacle: Entity) {
    if !remove_life_or_kill(world, player, obstacle) {
        ground_player(world, player);
    }
}

fn respond(world: &mut World, event: CollisionEvent) {
    let player = event.entity;
    let obstacle = event.other;
    let Some(state) = world.get::<PlayerControlled>(player).map(|pc| pc.state) else {
        return;
    };

    if event.other_obstacle.is_hazard()
        && (!world.has_all::<With<Collision>>(player) || world.get_entity(obstacle).is_err())
    {
        return;
    }

    match event.other_obstacle {
        ObstacleType::ScorePoint => {
            if let Some(mut score) = world.get_mut::<Score>(player) {
                score.value += 1;
            }
            world.destroy(obstacle);
        }
        ObstacleType::Box => {
            hit(world, player, obstacle);
            world.attach(
                obstacle,
                Visual::new(
                    tex::BOX_BROKEN,
                    BOX_WIDTH + BOX_BROKEN_GROWTH,
                    BOX_HEIGHT + BOX_BROKEN_GROWTH,
                ),
            );
        }
        ObstacleType::Rail if state.is_grounded() => hit(world, player, obstacle),
        ObstacleType::Rail if state.is_jumping() => {
            log::debug!("Grinding rail {obstacle:?}");
            if let Some(mut pc) = world.get_mut::<PlayerControlled>(player) {
                pc.state = PlayerState::Sliding;
            }
            if let Some(mut position) = world.get_mut::<Position>(player) {
                position.y = SLIDING_ON_RAIL_Y;
            }
            world.attach(
                player,
                (Pose::Slide.visual(), RidingRail { rail: obstacle }),
            );
            world.detach::<Collision>(obstacle);
        }
        ObstacleType::Grid if state != PlayerState::Crouch => {
            let stick = world.get::<GridLink>(obstacle).map(|link| link.stick);
            hit(world, player, obstacle);
            if let Some(stick) = stick {
                world.attach(
                    stick,
                    Visual::new(tex::GRID_BROKEN, GRID_WIDTH, GRID_HEIGHT),
                );
            }
            world.destroy(obstacle);
        }
        _ => {}
    }
}

/// Apply the collision rules to every message addressed to the player.
pub fn player_collision_response(world: &mut World) {
    let events: SmallVec<[CollisionEvent; 8]> = world
        .resource_mut::<Messages<CollisionEvent>>()
        .drain()
        .collect();
    for event in events {
        if world.has_all::<With<PlayerControlled>>(event.entity) {
            respond(world, event);
        }
    }
}
