//! Sprite art lookup.
//!
//! The terminal renderer draws entities as colored blocks; this resource
//! maps the sprite art names used by game logic to their display colors.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ArtStore {
    colors: FxHashMap<&'static str, Rgb>,
}

impl ArtStore {
    pub fn register(&mut self, name: &'static str, color: Rgb) {
        self.colors.insert(name, color);
    }

    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }
}

/// Register the stock art set.
pub fn stock_art() -> ArtStore {
    let mut store = ArtStore::default();
    store.register("bird_yellow", Rgb::new(255, 211, 0));
    store.register("bird_red", Rgb::new(220, 60, 40));
    store.register("bird_blue", Rgb::new(90, 140, 255));
    store.register("pipe_green", Rgb::new(70, 180, 70));
    store.register("pipe_lighted", Rgb::new(200, 240, 120));
    store.register("ground", Rgb::new(222, 184, 135));
    store.register("star", Rgb::new(255, 255, 200));
    store.register("logo", Rgb::new(255, 255, 255));
    store
}
