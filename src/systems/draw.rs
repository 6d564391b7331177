//! Render systems.
//!
//! They run once per host frame and only describe what to draw: each pushes
//! [`DrawCommand`]s into the world's [`DrawQueue`], which the host drains.

use bevy_ecs::prelude::*;

use crate::components::position::Position;
use crate::components::score::{Score, ScoreBind};
use crate::components::visual::Visual;
use crate::components::zindex::ZIndex;
use crate::constants::{RESULT_FONT_SIZE, SCORE_FONT_SIZE};
use crate::resources::drawqueue::{DrawCommand, DrawQueue, TextColor};

/// Draw every visible sprite, lowest [`ZIndex`] first.
pub fn draw_sprites(
    query: Query<(Entity, &Position, &Visual, Option<&ZIndex>)>,
    mut queue: ResMut<DrawQueue>,
) {
    let mut to_draw: Vec<(ZIndex, Entity, &Position, &Visual)> = query
        .iter()
        .filter(|(_, _, visual, _)| visual.visible)
        .map(|(e, p, v, z)| (z.copied().unwrap_or_default(), e, p, v))
        .collect();
    to_draw.sort_by_key(|(z, e, _, _)| (*z, *e));

    for (_, _, position, visual) in to_draw {
        queue.push(DrawCommand::Sprite {
            tex_key: visual.tex_key,
            x: position.x,
            y: position.y,
            width: visual.width,
            height: visual.height,
            rotation: visual.rotation,
        });
    }
}

/// Draw the live score next to each score label.
pub fn draw_score(
    labels: Query<(&Position, &ScoreBind)>,
    scores: Query<&Score>,
    mut queue: ResMut<DrawQueue>,
) {
    for (position, bind) in labels.iter() {
        // the player is gone once the run is over
        let Ok(score) = scores.get(bind.target) else {
            continue;
        };
        queue.push(DrawCommand::Text {
            text: format!("Score: {}", score.value),
            x: position.x,
            y: position.y,
            size: SCORE_FONT_SIZE,
            color: TextColor::Black,
        });
    }
}

/// Draw the final result on the game over screen.
pub fn draw_result(query: Query<(&Position, &Score)>, mut queue: ResMut<DrawQueue>) {
    for (position, score) in query.iter() {
        queue.push(DrawCommand::Text {
            text: format!("Your score: {}", score.value),
            x: position.x,
            y: position.y,
            size: RESULT_FONT_SIZE,
            color: TextColor::White,
        });
    }
}
