//! UI utilities for terminal interaction
//!
//! This module provides the interactive fuzzy picker, progress spinners and
//! the guard restoring terminal state when an invocation ends.

mod picker;
mod spinner;
mod terminal;

pub use picker::{FuzzyPicker, Picker};
pub use spinner::{clear_spinner, create_spinner};
pub use terminal::TerminalGuard;
