//! Reading and writing stored selections

use std::collections::BTreeSet;

use log::debug;

use crate::config::state;
use crate::error::Result;
use crate::selection::{Favorite, Selection};
use crate::state::{KeyValueStore, StoredKey};

/// Read a context/namespace key pair; `None` unless both halves are stored and non-empty
pub fn read_pair(
    store: &dyn KeyValueStore,
    (context_key, namespace_key): (StoredKey, StoredKey),
) -> Result<Option<Selection>> {
    let context = store.read(&context_key.name())?;
    let namespace = store.read(&namespace_key.name())?;
    let selection = Selection::from_stored(context, namespace);
    if selection.is_none() {
        debug!("No complete selection stored under {}/{}", context_key, namespace_key);
    }
    Ok(selection)
}

/// Write both halves of a selection. The two writes are not atomic together.
pub fn write_pair(
    store: &dyn KeyValueStore,
    (context_key, namespace_key): (StoredKey, StoredKey),
    selection: &Selection,
) -> Result<()> {
    store.write(&context_key.name(), &selection.context)?;
    store.write(&namespace_key.name(), &selection.namespace)
}

/// All favorites found in the store, sorted by name.
///
/// Stored values are shown as-is, empty ones included. A favorite with one of
/// its two keys missing is listed with an empty selection.
pub fn list_favorites(store: &dyn KeyValueStore) -> Result<Vec<Favorite>> {
    let contexts = favorite_names(store, state::FAVORITE_CONTEXT_PREFIX)?;
    let namespaces = favorite_names(store, state::FAVORITE_NAMESPACE_PREFIX)?;

    contexts
        .union(&namespaces)
        .map(|name| -> Result<Favorite> {
            let selection = if contexts.contains(name) && namespaces.contains(name) {
                let (context_key, namespace_key) = StoredKey::favorite(name);
                Selection::new(
                    store.read(&context_key.name())?,
                    store.read(&namespace_key.name())?,
                )
            } else {
                debug!("Favorite '{}' has only one half stored", name);
                Selection::default()
            };
            Ok(Favorite {
                name: name.clone(),
                selection,
            })
        })
        .collect()
}

/// Favorite names that have a key stored under `prefix`
fn favorite_names(store: &dyn KeyValueStore, prefix: &str) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for key in store.list_keys(prefix)? {
        let parsed = StoredKey::parse(&key);
        if let Some(name) = parsed.as_ref().and_then(StoredKey::favorite_name) {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}
