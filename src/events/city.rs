//! City day/night control events.

/// Commands driving the city's day/night machine. `Sunset` and `Sunrise`
/// are issued by scenes and by the debug keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEvent {
    Sunset,
    Sunrise,
}
