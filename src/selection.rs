//! Context/namespace selection value types

use std::fmt;

/// A context together with the namespace chosen within it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub context: String,
    pub namespace: String,
}

impl Selection {
    pub fn new(context: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            namespace: namespace.into(),
        }
    }

    /// Build a selection from stored halves; `None` unless both are non-empty
    pub fn from_stored(context: String, namespace: String) -> Option<Self> {
        if context.is_empty() || namespace.is_empty() {
            None
        } else {
            Some(Self { context, namespace })
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.context, self.namespace)
    }
}

/// A named favorite as listed from the state directory.
///
/// A favorite with only one half stored is listed with an empty selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub name: String,
    pub selection: Selection,
}

impl fmt::Display for Favorite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.selection)
    }
}
