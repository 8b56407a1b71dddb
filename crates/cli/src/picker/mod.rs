//! Interactive script picker.
//!
//! This module provides the terminal-based user interface for runpick: a
//! list of scripts narrowed down live by what the user types.
//!
//! # User Interface
//!
//! The interface supports:
//! - Typing to filter scripts by name (case-insensitive substring)
//! - Arrow keys or the mouse wheel to move the selection
//! - Enter or a left click to run the selected script
//! - Escape or Ctrl-C to cancel without running anything

pub mod types;
pub mod ui;

pub use types::{CycleDirection, UiState, ViewportState};
pub use ui::TerminalPrompt;
