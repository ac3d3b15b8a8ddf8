//! sk - Switch kubeconfig context and namespace
//!
//! A small CLI to jump between Kubernetes contexts and namespaces.
//!
//! # Features
//!
//! - Fuzzy-pick a context, a namespace, or both
//! - Jump back to the previously active context/namespace
//! - Store and recall named favorites
//!
//! # Example
//!
//! ```bash
//! # Pick a context, then a namespace
//! sk -n
//!
//! # Go back to where you were
//! sk -p
//!
//! # Remember the current selection and recall it later
//! sk -F payments
//! sk -f payments
//! ```

pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod kubeconfig;
pub mod selection;
pub mod state;
pub mod switch;
pub mod ui;

pub use cli::Cli;
pub use cluster::{KubeNamespaceSource, NamespaceSource};
pub use config::Settings;
pub use error::{Result, SkError};
pub use kubeconfig::{ConfigGateway, FileGateway, KubeConfig};
pub use selection::{Favorite, Selection};
pub use state::{FileStore, KeyValueStore, StoredKey};
pub use switch::{Mode, Outcome, PickScope, Resolver};
pub use ui::{FuzzyPicker, Picker, TerminalGuard};
