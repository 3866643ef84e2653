//! Frame composition: three panes plus a status line, fully redrawn every
//! frame from an immutable view of the state. No diffing, no partial
//! invalidation.
//!
//! Geometry reproduces the classic layout: a 3-row path bar on top, a
//! fixed-width entry list on the left, the file view taking the rest, and
//! one status row at the bottom. Together the chrome reserves 6 rows, so
//! the pager viewport is `screen rows - 6`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

use crate::core::pager::PageView;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{EntryList, FileView, PathBar};

/// Width of the entry-list pane, borders included.
pub const LIST_PANE_WIDTH: u16 = 32;

/// Rows of file text that fit on a screen of `rows` total rows, after the
/// path bar, borders, and status line take their share.
pub fn viewport_height(rows: u16) -> u16 {
    rows.saturating_sub(6)
}

pub fn draw_ui(frame: &mut Frame, app: &App, page: &PageView) {
    use Constraint::{Length, Min};
    let [path_area, main_area, status_area] =
        Layout::vertical([Length(3), Min(0), Length(1)]).areas(frame.area());
    let [list_area, file_area] =
        Layout::horizontal([Length(LIST_PANE_WIDTH), Min(0)]).areas(main_area);

    PathBar { cwd: &app.cwd }.render(frame, path_area);
    EntryList {
        entries: app.snapshot.entries(),
        selected: app.selected,
    }
    .render(frame, list_area);
    FileView { page }.render(frame, file_area);
    frame.render_widget(Span::raw(app.status.as_str()), status_area);
}
