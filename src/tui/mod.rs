//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop Shape
//!
//! One blocking key read per iteration, render-after-mutate:
//! recompute the page window, draw all three panes, wait for a key,
//! update the state, repeat. There is no background work and no partial
//! redraw, so nothing needs to survive an iteration; the pager reopens
//! the selected file each frame.

mod component;
mod components;
mod event;
pub mod ui;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::pager::PageView;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    info!("Terminal initialized, browsing {}", app.cwd.display());

    loop {
        let viewport = ui::viewport_height(terminal.size()?.height) as usize;
        let page = match app.selected_path() {
            Some(path) => PageView::load(&path, app.scroll, viewport),
            None => PageView::empty(),
        };

        terminal.draw(|frame| ui::draw_ui(frame, &app, &page))?;

        let Some(tui_event) = event::read_event()? else {
            continue;
        };
        let action = match tui_event {
            // The next iteration redraws against the new geometry.
            TuiEvent::Resize => continue,
            TuiEvent::CursorUp => Action::CursorUp,
            TuiEvent::CursorDown => Action::CursorDown,
            TuiEvent::ScrollUp => Action::ScrollUp,
            TuiEvent::ScrollDown => Action::ScrollDown,
            TuiEvent::Descend => Action::Descend,
            TuiEvent::Quit => Action::Quit,
        };

        if update(&mut app, action) == Effect::Quit {
            break;
        }
    }

    ratatui::restore();
    info!("Terminal restored, exiting");
    Ok(())
}
