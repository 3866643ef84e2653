//! End-to-end navigation tests against a real directory tree: snapshot →
//! action → pager, the same path the event loop takes, minus the terminal.

use std::fs;
use std::path::Path;

use perch::core::action::{Action, Effect, update};
use perch::core::fs::{DirectorySnapshot, EntryKind};
use perch::core::pager::PageView;
use perch::core::state::App;

// ============================================================================
// Helpers
// ============================================================================

/// Builds a small tree:
///
/// ```text
/// root/
/// ├── notes.txt      (5 lines)
/// └── docs/
///     └── guide.txt  (3 lines)
/// ```
fn setup_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let base = dir.path();

    fs::write(base.join("notes.txt"), "a\nb\nc\nd\ne\n").unwrap();
    fs::create_dir(base.join("docs")).unwrap();
    fs::write(base.join("docs/guide.txt"), "one\ntwo\nthree\n").unwrap();

    dir
}

fn app_at(path: &Path) -> App {
    let snapshot = DirectorySnapshot::load(path).expect("load snapshot");
    App::new(path.to_path_buf(), snapshot)
}

fn select(app: &mut App, name: &str) {
    app.selected = app
        .snapshot
        .entries()
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entry named {name}"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn descend_then_ascend_round_trip() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());

    select(&mut app, "docs");
    assert_eq!(update(&mut app, Action::Descend), Effect::None);
    assert_eq!(app.cwd, tree.path().join("docs"));
    assert!(app.snapshot.entries().iter().any(|e| e.name == "guide.txt"));

    // ".." is always the second entry.
    select(&mut app, "..");
    update(&mut app, Action::Descend);
    assert_eq!(app.cwd, tree.path());
    assert!(app.snapshot.entries().iter().any(|e| e.name == "notes.txt"));
}

#[test]
fn descend_resets_cursor_and_scroll_each_time() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());

    // Scroll the file view and move the cursor before descending.
    update(&mut app, Action::ScrollDown);
    update(&mut app, Action::ScrollDown);
    select(&mut app, "docs");
    assert!(app.scroll > 0 && app.selected > 0);

    update(&mut app, Action::Descend);
    assert_eq!((app.selected, app.scroll), (0, 0));
}

#[test]
fn full_cursor_cycle_visits_every_entry() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());
    let n = app.snapshot.len();

    let mut seen = Vec::new();
    for _ in 0..n {
        seen.push(app.selected);
        update(&mut app, Action::CursorDown);
    }

    assert_eq!(app.selected, seen[0]);
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

#[test]
fn dot_entries_are_directories() {
    let tree = setup_tree();
    let app = app_at(tree.path());

    let entries = app.snapshot.entries();
    assert_eq!(entries[0].name, ".");
    assert_eq!(entries[1].name, "..");
    assert!(entries[..2].iter().all(|e| e.kind == EntryKind::Directory));
}

// ============================================================================
// Pager over real files
// ============================================================================

#[test]
fn pager_windows_selected_file() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());
    select(&mut app, "notes.txt");

    update(&mut app, Action::ScrollDown);
    update(&mut app, Action::ScrollDown);

    let page = PageView::load(&app.selected_path().unwrap(), app.scroll, 2);
    assert_eq!(page.total_lines, 5);
    assert_eq!(page.gutter_width, 1);
    assert_eq!(page.lines, vec![(2, "c".to_string()), (3, "d".to_string())]);
}

#[test]
fn pager_on_directory_selection_is_blank() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());
    select(&mut app, "docs");

    let page = PageView::load(&app.selected_path().unwrap(), 0, 10);
    assert!(page.lines.is_empty());
}

#[test]
fn scroll_offset_survives_selection_change_by_default() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());
    select(&mut app, "notes.txt");

    for _ in 0..4 {
        update(&mut app, Action::ScrollDown);
    }
    update(&mut app, Action::CursorDown);

    // The offset carries over to whatever is now selected.
    assert_eq!(app.scroll, 4);
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn startup_on_unreadable_directory_is_an_error() {
    let tree = setup_tree();
    let gone = tree.path().join("never-existed");

    assert!(DirectorySnapshot::load(&gone).is_err());
}

#[test]
fn descend_into_vanished_directory_keeps_browsing_state() {
    let tree = setup_tree();
    let mut app = app_at(tree.path());

    select(&mut app, "docs");
    fs::remove_dir_all(tree.path().join("docs")).unwrap();

    let len_before = app.snapshot.len();
    update(&mut app, Action::Descend);

    assert_eq!(app.cwd, tree.path());
    assert_eq!(app.snapshot.len(), len_before);
    assert!(app.status.contains("cannot read directory"));

    // Still fully navigable afterwards.
    select(&mut app, "notes.txt");
    let page = PageView::load(&app.selected_path().unwrap(), 0, 3);
    assert_eq!(page.lines.len(), 3);
}
