//! Persisted selection state
//!
//! Previous and favorite selections are kept as one plain-text file per key
//! inside the per-user state directory (`~/.sk`).

mod keys;
mod store;

pub use keys::{validate_favorite_name, StoredKey};
pub use store::{FileStore, KeyValueStore};
