//! Scene selection resources.
//!
//! Which top-level scene machine is driven this tick, plus the pending
//! switch requested by a scene action. Switches are applied between ticks
//! by `scene_change_detector`, which also runs the entered scene's init.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Intro,
    Start,
    Play,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveScene {
    current: SceneId,
}

impl Default for ActiveScene {
    fn default() -> Self {
        ActiveScene {
            current: SceneId::Intro,
        }
    }
}

impl ActiveScene {
    pub fn get(&self) -> SceneId {
        self.current
    }

    pub fn set(&mut self, scene: SceneId) {
        self.current = scene;
    }
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct NextScene {
    next: Option<SceneId>,
}

impl NextScene {
    pub fn set(&mut self, scene: SceneId) {
        self.next = Some(scene);
    }

    pub fn take(&mut self) -> Option<SceneId> {
        self.next.take()
    }

    pub fn pending(&self) -> bool {
        self.next.is_some()
    }
}
