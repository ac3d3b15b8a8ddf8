//! Selection switching
//!
//! Turns the requested mode into a new current selection, applies it to the
//! kubeconfig and remembers what was current before.

mod favorites;
mod mode;
mod presenter;
mod resolver;

pub use favorites::{list_favorites, read_pair, write_pair};
pub use mode::{Mode, PickScope};
pub use presenter::{current_first, validate, Presenter};
pub use resolver::{Outcome, Resolver};
