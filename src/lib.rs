//! Perch library exports.
//!
//! The binary is a thin wrapper around these modules; exposing them as a
//! library lets the integration tests drive navigation and pagination
//! against real directories without a terminal.

pub mod core;
pub mod tui;
