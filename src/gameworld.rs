//! A bounded entity world with its own simulation and render schedules.
//!
//! [`GameWorld`] owns a bevy [`World`] plus two [`Schedule`]s: the update
//! schedule runs once per simulation tick, the render schedule once per host
//! frame. Each game mode builds its own `GameWorld` so nothing leaks between
//! modes.
//!
//! Entity access goes through [`WorldExt`], which makes every operation on a
//! stale or unknown handle a no-op instead of a panic.

use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;
use bevy_ecs::system::ScheduleSystem;

use crate::components::group::Group;
use crate::constants::MAX_ENTITIES;
use crate::events::collision::CollisionEvent;
use crate::resources::drawqueue::DrawQueue;
use crate::resources::worldtime::WorldTime;
use crate::systems::time::advance_world_time;

/// Handle-safe entity operations on a bevy [`World`].
pub trait WorldExt {
    /// Insert or overwrite components on `entity`. Unknown handles are ignored.
    fn attach<B: Bundle>(&mut self, entity: Entity, bundle: B);
    /// Remove the components in `B` from `entity`, if present.
    fn detach<B: Bundle>(&mut self, entity: Entity);
    /// Despawn `entity`, clearing all of its components.
    fn destroy(&mut self, entity: Entity);
    /// True when `entity` exists and matches the filter `F`, for example
    /// `(With<Position>, With<Collision>)`.
    fn has_all<F: QueryFilter>(&self, entity: Entity) -> bool;
    /// Number of live entities carrying a [`Group`] tag.
    fn tagged_count(&self) -> usize;
    /// Spawn a tagged entity unless the world is already at capacity.
    fn spawn_bounded<B: Bundle>(&mut self, group: &'static str, bundle: B) -> Option<Entity>;
}

impl WorldExt for World {
    fn attach<B: Bundle>(&mut self, entity: Entity, bundle: B) {
        if let Ok(mut entity_mut) = self.get_entity_mut(entity) {
            entity_mut.insert(bundle);
        }
    }

    fn detach<B: Bundle>(&mut self, entity: Entity) {
        if let Ok(mut entity_mut) = self.get_entity_mut(entity) {
            entity_mut.remove::<B>();
        }
    }

    fn destroy(&mut self, entity: Entity) {
        if let Ok(entity_mut) = self.get_entity_mut(entity) {
            entity_mut.despawn();
        }
    }

    fn has_all<F: QueryFilter>(&self, entity: Entity) -> bool {
        // No state means one of the filtered components was never registered,
        // so no entity can match.
        match self.try_query_filtered::<(), F>() {
            Some(mut state) => state.get(self, entity).is_ok(),
            None => false,
        }
    }

    fn tagged_count(&self) -> usize {
        match self.try_query::<&Group>() {
            Some(mut state) => state.iter(self).count(),
            None => 0,
        }
    }

    fn spawn_bounded<B: Bundle>(&mut self, group: &'static str, bundle: B) -> Option<Entity> {
        if self.tagged_count() >= MAX_ENTITIES {
            log::warn!("World is full ({MAX_ENTITIES} entities), not spawning '{group}'");
            return None;
        }
        let entity = self.spawn((Group::new(group), bundle)).id();
        log::debug!("Spawned {group} {entity:?}");
        Some(entity)
    }
}

/// One game mode's world and systems.
pub struct GameWorld {
    pub world: World,
    update: Schedule,
    render: Schedule,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl GameWorld {
    /// An empty world with the resources every mode relies on: the frame
    /// counter, the draw queue and the collision message queue.
    pub fn new() -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(DrawQueue::default());
        world.init_resource::<Messages<CollisionEvent>>();
        GameWorld {
            world,
            update: Schedule::default(),
            render: Schedule::default(),
        }
    }

    /// Register simulation systems. Pass them as a `.chain()`ed tuple: the
    /// pipeline relies on registration order, and chaining flushes commands
    /// between systems so later ones see earlier mutations.
    pub fn add_systems<M>(&mut self, systems: impl IntoScheduleConfigs<ScheduleSystem, M>) {
        self.update.add_systems(systems);
    }

    /// Register render systems, same conventions as [`GameWorld::add_systems`].
    pub fn add_render_systems<M>(&mut self, systems: impl IntoScheduleConfigs<ScheduleSystem, M>) {
        self.render.add_systems(systems);
    }

    /// Advance the frame counter, then run the simulation systems.
    pub fn tick(&mut self) {
        advance_world_time(&mut self.world);
        self.run_systems();
    }

    pub fn run_systems(&mut self) {
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn run_render_systems(&mut self) {
        self.render.run(&mut self.world);
    }

    pub fn frame(&self) -> u64 {
        self.world.resource::<WorldTime>().frame
    }

    pub fn spawn<B: Bundle>(&mut self, group: &'static str, bundle: B) -> Option<Entity> {
        self.world.spawn_bounded(group, bundle)
    }

    pub fn attach<B: Bundle>(&mut self, entity: Entity, bundle: B) {
        self.world.attach(entity, bundle);
    }

    pub fn detach<B: Bundle>(&mut self, entity: Entity) {
        self.world.detach::<B>(entity);
    }

    pub fn destroy(&mut self, entity: Entity) {
        self.world.destroy(entity);
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.world.get::<T>(entity)
    }

    pub fn has_all<F: QueryFilter>(&self, entity: Entity) -> bool {
        self.world.has_all::<F>(entity)
    }

    /// Take the draw commands produced by the last render pass.
    pub fn take_draw_commands(&mut self) -> DrawQueue {
        std::mem::take(&mut *self.world.resource_mut::<DrawQueue>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collision::{Collision, ObstacleType};
    use crate::components::group;
    use crate::components::position::Position;
    use crate::components::visual::Visual;

    #[test]
    fn has_all_requires_every_component() {
        let mut gw = GameWorld::new();
        let e = gw
            .spawn(group::OBSTACLE, Position::new(1.0, 2.0))
            .expect("capacity");
        assert!(gw.has_all::<With<Position>>(e));
        assert!(!gw.has_all::<(With<Position>, With<Collision>)>(e));

        gw.attach(e, Collision::new(10.0, 10.0, ObstacleType::Box));
        assert!(gw.has_all::<(With<Position>, With<Collision>)>(e));

        gw.detach::<Collision>(e);
        assert!(!gw.has_all::<With<Collision>>(e));
        assert!(gw.has_all::<With<Position>>(e));
    }

    #[test]
    fn destroy_clears_everything_and_stale_handles_are_inert() {
        let mut gw = GameWorld::new();
        let e = gw
            .spawn(
                group::OBSTACLE,
                (Position::new(0.0, 0.0), Visual::new("box", 75.0, 75.0)),
            )
            .expect("capacity");
        gw.destroy(e);
        assert!(gw.get::<Position>(e).is_none());
        assert!(!gw.has_all::<With<Position>>(e));

        // none of these may panic on a dead handle
        gw.destroy(e);
        gw.attach(e, Position::new(5.0, 5.0));
        gw.detach::<Visual>(e);
        assert!(gw.get::<Position>(e).is_none());
        assert_eq!(gw.world.tagged_count(), 0);
    }

    #[test]
    fn spawning_stops_at_capacity() {
        let mut gw = GameWorld::new();
        for _ in 0..MAX_ENTITIES {
            assert!(gw.spawn(group::PICKUP, Position::new(0.0, 0.0)).is_some());
        }
        assert!(gw.spawn(group::PICKUP, Position::new(0.0, 0.0)).is_none());
        assert_eq!(gw.world.tagged_count(), MAX_ENTITIES);
    }

    #[test]
    fn tick_advances_the_frame_before_systems_run() {
        #[derive(Resource, Default)]
        struct Seen(Vec<u64>);

        fn record(time: Res<WorldTime>, mut seen: ResMut<Seen>) {
            seen.0.push(time.frame);
        }

        let mut gw = GameWorld::new();
        gw.world.init_resource::<Seen>();
        gw.add_systems(record);
        gw.tick();
        gw.tick();
        assert_eq!(gw.world.resource::<Seen>().0, vec![1, 2]);
        assert_eq!(gw.frame(), 2);
    }
}
