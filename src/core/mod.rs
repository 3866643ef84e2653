//! # Core Navigation Logic
//!
//! UI-agnostic business logic for the file browser. It knows nothing about
//! any specific terminal technology.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │        (this module)         │
//!                 │                              │
//!                 │  • fs     (directory model)  │
//!                 │  • pager  (line windowing)   │
//!                 │  • state  (App data)         │
//!                 │  • action (update reducer)   │
//!                 │  • config (TOML settings)    │
//!                 └──────────────┬───────────────┘
//!                                │
//!                                ▼
//!                        ┌──────────────┐
//!                        │  TUI Adapter │
//!                        │   (ratatui)  │
//!                        └──────────────┘
//! ```
//!
//! State changes only happen through `update(app, action)` in [`action`].
//! Rendering consumes an immutable view of the state each frame.

pub mod action;
pub mod config;
pub mod fs;
pub mod pager;
pub mod state;
