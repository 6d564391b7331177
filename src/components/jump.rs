use bevy_ecs::prelude::Component;

/// Jump bookkeeping for the player.
///
/// Written when a jump starts and read every tick by the jump system to
/// sample the arc.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Jump {
    /// Simulation frame the jump started on.
    pub start_frame: u64,
    /// Height the arc starts from and lands back on.
    pub from_y: f32,
}
