//! Global signal storage resource.
//!
//! A world-wide map for cross-system communication without entity queries:
//! the city publishes the "night" flag consumed by obstacle spawning and the
//! renderer, scenes publish the banner text, input publishes the quit flag.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
    /// Integer signals addressed by string keys.
    integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    strings: FxHashMap<String, String>,
}

impl WorldSignals {
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn clear_string(&mut self, key: &str) {
        self.strings.remove(key);
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(|s| s.as_str())
    }
}
