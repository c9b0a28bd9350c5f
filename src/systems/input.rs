//! Terminal key polling.
//!
//! Runs in the main loop before the schedule, outside the ECS, because it
//! does terminal I/O. Tests drive [`InputState`] directly instead.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;

/// Signal flag requesting an orderly shutdown.
pub const QUIT_FLAG: &str = "quit";

/// Drain all pending terminal events into the input state without blocking.
/// Esc, `q` and ctrl-c raise the quit flag.
pub fn poll_terminal(input: &mut InputState, signals: &mut WorldSignals) -> io::Result<()> {
    input.begin_tick();
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => signals.set_flag(QUIT_FLAG),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                signals.set_flag(QUIT_FLAG)
            }
            code => input.press(code),
        }
    }
    Ok(())
}
