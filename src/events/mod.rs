//! Messages exchanged between systems.
//!
//! - [`collision`] – intersections found by the collision detector

pub mod collision;
