//! Audio playback bookkeeping.
//!
//! The audio sink tracks which music ids are currently looping so scenes can
//! ask "is the music already running" before requesting a restart.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Default)]
pub struct AudioState {
    running_music: FxHashSet<String>,
}

impl AudioState {
    pub fn music_started(&mut self, id: &str) {
        self.running_music.insert(id.to_string());
    }

    pub fn music_stopped(&mut self, id: &str) {
        self.running_music.remove(id);
    }

    pub fn stop_all_music(&mut self) {
        self.running_music.clear();
    }

    pub fn is_music_running(&self, id: &str) -> bool {
        self.running_music.contains(id)
    }
}
