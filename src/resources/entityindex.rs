//! Name-to-entity registry.
//!
//! The ECS world is the arena; this resource maps stable names ("bird",
//! "city", "ground", "world", "credits") to their entity ids so controllers
//! can reference each other by lookup each tick instead of holding pointers.
//! Short-lived entities (obstacles, stars) are unnamed and addressed through
//! their [`Group`](crate::components::group::Group) instead.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default)]
pub struct EntityIndex {
    by_name: FxHashMap<&'static str, Entity>,
}

impl EntityIndex {
    pub fn insert(&mut self, name: &'static str, entity: Entity) {
        self.by_name.insert(name, entity);
    }

    pub fn get(&self, name: &str) -> Option<Entity> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up an entity that must have been registered during setup.
    /// A missing name is a programming error, not a runtime condition.
    pub fn require(&self, name: &str) -> Entity {
        self.get(name)
            .unwrap_or_else(|| panic!("entity '{}' not registered in the index", name))
    }
}
