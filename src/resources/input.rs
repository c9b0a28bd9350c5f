//! Keyboard input state resource.
//!
//! The terminal frontend polls crossterm key events once per tick and folds
//! them into this resource. Terminals only deliver press events (with
//! auto-repeat), so "down" here means "a press arrived this tick"; the
//! distinction between held and just-pressed is approximated by repeat.

use bevy_ecs::prelude::Resource;
use crossterm::event::KeyCode;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug)]
pub struct InputState {
    pressed: FxHashSet<KeyCode>,
    previous: FxHashSet<KeyCode>,
    /// Key bound to the bird's flap action.
    pub jump_key: KeyCode,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            pressed: FxHashSet::default(),
            previous: FxHashSet::default(),
            jump_key: KeyCode::Char(' '),
        }
    }
}

impl InputState {
    pub fn with_jump_key(name: &str) -> Self {
        InputState {
            jump_key: parse_key(name),
            ..Default::default()
        }
    }

    /// Roll the current frame's presses into history. Called once per tick
    /// before new events are folded in.
    pub fn begin_tick(&mut self) {
        self.previous = std::mem::take(&mut self.pressed);
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key) && !self.previous.contains(&key)
    }

    pub fn jump_down(&self) -> bool {
        self.is_down(self.jump_key)
    }

    pub fn jump_just_pressed(&self) -> bool {
        self.just_pressed(self.jump_key)
    }
}

/// Map a configuration key name to a crossterm key code.
/// Unknown names fall back to space.
pub fn parse_key(name: &str) -> KeyCode {
    match name.to_ascii_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "enter" => KeyCode::Enter,
        s if s.chars().count() == 1 => {
            // single character binding, e.g. "j"
            match s.chars().next() {
                Some(c) => KeyCode::Char(c),
                None => KeyCode::Char(' '),
            }
        }
        _ => KeyCode::Char(' '),
    }
}
