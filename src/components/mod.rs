//! ECS components for entities.
//!
//! Plain data attached to entities; behaviour lives in [`crate::systems`].
//!
//! Submodules overview:
//! - [`collision`] – collidability and obstacle type tags
//! - [`group`] – tag naming what an entity is, counted against world capacity
//! - [`jump`] – jump start bookkeeping
//! - [`lives`] – remaining lives as heart entity handles
//! - [`motion`] – horizontal scroll speed
//! - [`playercontrolled`] – player state machine, poses and rail link
//! - [`position`] – world-space top-left corner
//! - [`score`] – score value and score label binding
//! - [`visual`] – texture, size, visibility and rotation
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod collision;
pub mod group;
pub mod jump;
pub mod lives;
pub mod motion;
pub mod playercontrolled;
pub mod position;
pub mod score;
pub mod visual;
pub mod zindex;
