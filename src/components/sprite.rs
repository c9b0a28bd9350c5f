use bevy_ecs::prelude::Component;

/// Reference into the art store; the renderer resolves the key each frame.
///
/// The bird's health machine swaps the key on state entry (yellow while sane,
/// red while injured, blue when dead).
#[derive(Component, Clone, Copy, Debug)]
pub struct Sprite {
    pub art: &'static str,
}

impl Sprite {
    pub fn new(art: &'static str) -> Self {
        Self { art }
    }

    pub fn select(&mut self, art: &'static str) {
        self.art = art;
    }
}
