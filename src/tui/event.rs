//! Translation from crossterm events to browser inputs.
//!
//! Key bindings: Up/Down move the directory cursor, `k`/`j` scroll the file
//! view (k down, j up), Right or Enter descends, `q`/Esc/Ctrl+C quits.
//! Anything else is ignored.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;

/// TUI-specific input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    Descend,
    Quit,
    Resize,
}

/// Block until the next terminal event; `None` for events the browser
/// doesn't recognize.
pub fn read_event() -> io::Result<Option<TuiEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            Ok(translate_key(key.modifiers, key.code))
        }
        Event::Resize(..) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

fn translate_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        // k pages down, j pages up.
        (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Right) | (_, KeyCode::Enter) => Some(TuiEvent::Descend),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}
