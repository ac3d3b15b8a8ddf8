//! Names of the keys kept in the state directory

use std::fmt;

use crate::config::state;
use crate::error::{Result, SkError};

/// A key in the state directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredKey {
    PreviousContext,
    PreviousNamespace,
    FavoriteContext(String),
    FavoriteNamespace(String),
}

impl StoredKey {
    /// Both halves of a named favorite
    pub fn favorite(name: &str) -> (StoredKey, StoredKey) {
        (
            StoredKey::FavoriteContext(name.to_string()),
            StoredKey::FavoriteNamespace(name.to_string()),
        )
    }

    /// Both halves of the previous selection
    pub fn previous() -> (StoredKey, StoredKey) {
        (StoredKey::PreviousContext, StoredKey::PreviousNamespace)
    }

    /// File name of this key
    pub fn name(&self) -> String {
        match self {
            StoredKey::PreviousContext => state::PREVIOUS_CONTEXT.to_string(),
            StoredKey::PreviousNamespace => state::PREVIOUS_NAMESPACE.to_string(),
            StoredKey::FavoriteContext(name) => {
                format!("{}{}", state::FAVORITE_CONTEXT_PREFIX, name)
            }
            StoredKey::FavoriteNamespace(name) => {
                format!("{}{}", state::FAVORITE_NAMESPACE_PREFIX, name)
            }
        }
    }

    /// Parse a stored file name back into a key
    pub fn parse(key: &str) -> Option<StoredKey> {
        match key {
            state::PREVIOUS_CONTEXT => return Some(StoredKey::PreviousContext),
            state::PREVIOUS_NAMESPACE => return Some(StoredKey::PreviousNamespace),
            _ => {}
        }

        if let Some(name) = key.strip_prefix(state::FAVORITE_CONTEXT_PREFIX) {
            return Some(StoredKey::FavoriteContext(name.to_string()));
        }
        key.strip_prefix(state::FAVORITE_NAMESPACE_PREFIX)
            .map(|name| StoredKey::FavoriteNamespace(name.to_string()))
    }

    /// Favorite name carried by this key, if any
    pub fn favorite_name(&self) -> Option<&str> {
        match self {
            StoredKey::FavoriteContext(name) | StoredKey::FavoriteNamespace(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for StoredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check that a favorite name can be used as part of a file name
pub fn validate_favorite_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SkError::Usage("Favorite name must not be empty".to_string()));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SkError::Usage(format!(
            "Invalid favorite name '{}': path separators and '.'/'..' are not allowed",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(StoredKey::PreviousContext.name(), "previous_context");
        assert_eq!(StoredKey::PreviousNamespace.name(), "previous_namespace");
        assert_eq!(
            StoredKey::FavoriteContext("work".into()).name(),
            "favorite_context_work"
        );
        assert_eq!(
            StoredKey::FavoriteNamespace("work".into()).name(),
            "favorite_namespace_work"
        );
    }

    #[test]
    fn test_parse_favorite_keys() {
        assert_eq!(
            StoredKey::parse("favorite_context_a"),
            Some(StoredKey::FavoriteContext("a".into()))
        );
        assert_eq!(
            StoredKey::parse("favorite_namespace_my_fav"),
            Some(StoredKey::FavoriteNamespace("my_fav".into()))
        );
        assert_eq!(
            StoredKey::parse("previous_context"),
            Some(StoredKey::PreviousContext)
        );
        assert_eq!(StoredKey::parse("something_else"), None);
    }

    #[test]
    fn test_favorite_name() {
        assert_eq!(
            StoredKey::FavoriteNamespace("b".into()).favorite_name(),
            Some("b")
        );
        assert_eq!(StoredKey::PreviousContext.favorite_name(), None);
    }

    #[test]
    fn test_validate_favorite_name() {
        assert!(validate_favorite_name("prod-eu").is_ok());
        assert!(validate_favorite_name("").is_err());
        assert!(validate_favorite_name("..").is_err());
        assert!(validate_favorite_name("a/b").is_err());
        assert!(matches!(
            validate_favorite_name("a\\b"),
            Err(SkError::Usage(_))
        ));
    }
}
