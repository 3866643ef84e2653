//! # Application State
//!
//! Core navigation state for Perch. This module contains domain data only,
//! no TUI-specific types. Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── cwd: PathBuf                 // browsing directory (explicit, never chdir)
//! ├── snapshot: DirectorySnapshot  // current listing
//! ├── selected: usize              // cursor into the snapshot, wraps
//! ├── scroll: usize                // lines skipped in the viewed file
//! ├── status: String               // status line text
//! └── reset_scroll_on_select: bool // config toggle
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! The browsing directory is an explicit field threaded through snapshot
//! loads and file opens; the process working directory is never mutated,
//! which keeps this core testable without global state.

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::fs::{DirectorySnapshot, Entry};

/// Default status line: the key bindings.
pub const STATUS_HINT: &str = "up/down select | k/j scroll | right enter dir | q quit";

pub struct App {
    pub cwd: PathBuf,
    pub snapshot: DirectorySnapshot,
    pub selected: usize,
    pub scroll: usize,
    pub status: String,
    /// When set, moving the directory cursor rewinds the file view to the
    /// top. Off by default: the scroll offset survives selection changes.
    pub reset_scroll_on_select: bool,
}

impl App {
    pub fn new(cwd: PathBuf, snapshot: DirectorySnapshot) -> Self {
        Self {
            cwd,
            snapshot,
            selected: 0,
            scroll: 0,
            status: String::from(STATUS_HINT),
            reset_scroll_on_select: false,
        }
    }

    pub fn from_config(cwd: PathBuf, snapshot: DirectorySnapshot, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(cwd, snapshot);
        app.reset_scroll_on_select = config.reset_scroll_on_select;
        app
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.snapshot.get(self.selected)
    }

    /// Path of the selected entry, for the pager. Plain `cwd.join(name)`;
    /// joining `.` or `..` yields a directory, which the pager renders
    /// blank anyway.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry().map(|entry| self.cwd.join(&entry.name))
    }
}
