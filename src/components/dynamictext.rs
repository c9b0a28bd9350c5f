use bevy_ecs::prelude::Component;

/// Text rendered at the entity's map position (used for the scrolling intro
/// credits). Screen-anchored banners go through world signals instead.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    pub text: String,
    pub visible: bool,
}

impl DynamicText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}
