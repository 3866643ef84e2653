//! # Actions
//!
//! Everything the user can do becomes an `Action`. Arrow key? That's
//! `Action::CursorDown`. Entering a directory? `Action::Descend`.
//!
//! The `update()` function applies one action to the state and returns an
//! [`Effect`] for the event loop. Snapshot reloads on descent are the only
//! I/O here; everything else is a pure state transition.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};
use std::path::Path;

use crate::core::fs::{DirectorySnapshot, EntryKind};
use crate::core::state::{App, STATUS_HINT};

/// One input event's worth of intent, applied exactly once, synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    Descend,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CursorUp => {
            let n = app.snapshot.len();
            if n > 0 {
                app.selected = (app.selected + n - 1) % n;
                after_select(app);
            }
            Effect::None
        }
        Action::CursorDown => {
            let n = app.snapshot.len();
            if n > 0 {
                app.selected = (app.selected + 1) % n;
                after_select(app);
            }
            Effect::None
        }
        Action::ScrollUp => {
            app.scroll = app.scroll.saturating_sub(1);
            Effect::None
        }
        Action::ScrollDown => {
            // Unbounded: the pager windows past end-of-file into a blank
            // pane rather than clamping here.
            app.scroll = app.scroll.saturating_add(1);
            Effect::None
        }
        Action::Descend => descend(app),
        Action::Quit => Effect::Quit,
    }
}

fn after_select(app: &mut App) {
    if app.reset_scroll_on_select {
        app.scroll = 0;
    }
}

/// Enter the selected entry if it is a directory; anything else is a no-op.
///
/// The new snapshot replaces the old one only on a successful reload. On
/// failure the previous snapshot, cursor, and scroll all survive and the
/// failure is reported on the status line.
fn descend(app: &mut App) -> Effect {
    let Some(entry) = app.snapshot.get(app.selected) else {
        return Effect::None;
    };
    if entry.kind != EntryKind::Directory {
        return Effect::None;
    }

    let target = match entry.name.as_str() {
        "." => app.cwd.clone(),
        ".." => app
            .cwd
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| app.cwd.clone()),
        name => app.cwd.join(name),
    };

    match DirectorySnapshot::load(&target) {
        Ok(snapshot) => {
            info!("Descending into {}", target.display());
            app.snapshot = snapshot;
            app.cwd = target;
            app.selected = 0;
            app.scroll = 0;
            app.status = String::from(STATUS_HINT);
        }
        Err(e) => {
            warn!("Descend failed: {e}");
            app.status = e.to_string();
        }
    }
    Effect::None
}
