//! Selection state machine

use log::{debug, info};

use crate::cluster::NamespaceSource;
use crate::error::{Result, SkError};
use crate::kubeconfig::{ConfigGateway, KubeConfig};
use crate::selection::{Favorite, Selection};
use crate::state::{KeyValueStore, StoredKey};
use crate::ui::Picker;

use super::favorites::{list_favorites, read_pair, write_pair};
use super::mode::{Mode, PickScope};
use super::presenter::Presenter;

/// Result of running one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Current selection was printed; `None` if no context was ever set
    Current(Option<Selection>),
    /// Kubeconfig now points at this selection
    Switched(Selection),
    /// Nothing stored for the requested favorite/previous selection
    Unchanged,
    /// Current selection stored as a favorite
    Stored { name: String, selection: Selection },
    /// Stored favorites, sorted by name
    Favorites(Vec<Favorite>),
    /// User backed out of the picker
    Cancelled,
}

impl Outcome {
    /// Lines printed on stdout for this outcome
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Current(Some(selection)) => vec![
                format!("Current context: {}", selection.context),
                format!("Current namespace: {}", selection.namespace),
            ],
            Outcome::Current(None) => vec!["No current context set".to_string()],
            Outcome::Switched(selection) => vec![format!("Switched to {}", selection)],
            Outcome::Stored { name, selection } => {
                vec![format!("Stored favorite '{}': {}", name, selection)]
            }
            Outcome::Favorites(favorites) => favorites.iter().map(|f| f.to_string()).collect(),
            Outcome::Unchanged | Outcome::Cancelled => Vec::new(),
        }
    }
}

/// Resolves a [`Mode`] into a new current selection and records the previous one
pub struct Resolver<'a> {
    store: &'a dyn KeyValueStore,
    gateway: &'a dyn ConfigGateway,
    namespaces: &'a dyn NamespaceSource,
    presenter: Presenter<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        gateway: &'a dyn ConfigGateway,
        namespaces: &'a dyn NamespaceSource,
        picker: &'a dyn Picker,
    ) -> Self {
        Self {
            store,
            gateway,
            namespaces,
            presenter: Presenter::new(picker),
        }
    }

    pub fn run(&self, mode: &Mode) -> Result<Outcome> {
        let mut config = self.gateway.load()?;
        let before = config.current_selection();
        debug!("Running {:?}, current selection {:?}", mode, before);

        let target = match mode {
            Mode::PrintCurrent => return Ok(Outcome::Current(before)),
            Mode::ListFavorites => return Ok(Outcome::Favorites(list_favorites(self.store)?)),
            Mode::StoreFavorite(name) => return self.store_favorite(name, before),
            Mode::LoadFavorite(name) => read_pair(self.store, StoredKey::favorite(name))?,
            Mode::SwitchPrevious => read_pair(self.store, StoredKey::previous())?,
            Mode::InteractivePick(scope) => match self.pick(&config, *scope)? {
                Some(selection) => Some(selection),
                None => return Ok(Outcome::Cancelled),
            },
        };

        let Some(target) = target else {
            info!("Nothing stored for {:?}, leaving kubeconfig unchanged", mode);
            return Ok(Outcome::Unchanged);
        };

        config.apply(&target)?;
        self.gateway.persist(&config)?;

        match before {
            Some(previous) => write_pair(self.store, StoredKey::previous(), &previous)?,
            None => debug!("No selection before the switch, previous not recorded"),
        }

        info!("Switched to {}", target);
        Ok(Outcome::Switched(target))
    }

    fn store_favorite(&self, name: &str, current: Option<Selection>) -> Result<Outcome> {
        let selection = current.ok_or_else(|| {
            SkError::Selection("No current context set, nothing to store as favorite".to_string())
        })?;
        write_pair(self.store, StoredKey::favorite(name), &selection)?;
        Ok(Outcome::Stored {
            name: name.to_string(),
            selection,
        })
    }

    /// Drive the picker; `None` if the user cancelled at any step
    fn pick(&self, config: &KubeConfig, scope: PickScope) -> Result<Option<Selection>> {
        let context = match scope {
            PickScope::NamespaceOnly => {
                if config.current_context.is_empty() {
                    return Err(SkError::Selection(
                        "No current context set, select a context first".to_string(),
                    ));
                }
                config.current_context.clone()
            }
            PickScope::ContextOnly | PickScope::ContextThenNamespace => {
                match self.presenter.choose(
                    "context",
                    config.context_names(),
                    &config.current_context,
                )? {
                    Some(context) => context,
                    None => return Ok(None),
                }
            }
        };

        let current_namespace = config.namespace_of(&context);
        if scope == PickScope::ContextOnly {
            return Ok(Some(Selection::new(context, current_namespace)));
        }

        let names = self.namespaces.list_namespaces(&context)?;
        Ok(self
            .presenter
            .choose("namespace", names, &current_namespace)?
            .map(|namespace| Selection::new(context, namespace)))
    }
}
