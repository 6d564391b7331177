//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values. Entities without a [`ZIndex`] are drawn first.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
