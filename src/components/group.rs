use bevy_ecs::prelude::Component;

/// Tag component classifying an entity ("obstacles", "stars").
///
/// Controllers scan by group when removing entities wholesale, e.g. the city
/// removing every star on leaving night.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }
}
