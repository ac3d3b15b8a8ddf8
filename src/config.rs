use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SkError};

/// Configuration constants for the kubeconfig location
pub mod kube {
    /// Environment variable overriding the kubeconfig path
    pub const ENV_VAR: &str = "KUBECONFIG";

    /// Kubeconfig path relative to HOME
    pub const DEFAULT_PATH: &str = ".kube/config";
}

/// Configuration constants for persisted selection state
pub mod state {
    /// State directory name (relative to HOME)
    pub const DIR_NAME: &str = ".sk";

    /// Key holding the context active before the last switch
    pub const PREVIOUS_CONTEXT: &str = "previous_context";

    /// Key holding the namespace active before the last switch
    pub const PREVIOUS_NAMESPACE: &str = "previous_namespace";

    /// Prefix of favorite context keys, followed by the favorite name
    pub const FAVORITE_CONTEXT_PREFIX: &str = "favorite_context_";

    /// Prefix of favorite namespace keys, followed by the favorite name
    pub const FAVORITE_NAMESPACE_PREFIX: &str = "favorite_namespace_";
}

/// Configuration constants for the interactive picker
pub mod picker {
    /// Prompt shown in front of the filter input
    pub const PROMPT: &str = "⎈";

    /// Lines reserved for the prompt and the filter line
    pub const RESERVED_LINES: u16 = 2;

    /// Page height used when the terminal size can't be read
    pub const FALLBACK_PAGE_SIZE: usize = 15;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Paths resolved once at startup and handed to every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Kubeconfig file read and written by this invocation
    pub kubeconfig_path: PathBuf,
    /// Directory holding one file per stored key
    pub state_dir: PathBuf,
}

impl Settings {
    /// Resolve settings from the CLI value / KUBECONFIG and the user's home directory.
    ///
    /// `kubeconfig` may be a path list as found in KUBECONFIG; the first
    /// non-empty entry is used.
    pub fn resolve(kubeconfig: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| SkError::Storage("Couldn't resolve user home dir".to_string()))?;

        let kubeconfig_path = kubeconfig
            .and_then(first_path)
            .unwrap_or_else(|| home.join(kube::DEFAULT_PATH));
        let state_dir = home.join(state::DIR_NAME);

        debug!(
            "Resolved kubeconfig={} state_dir={}",
            kubeconfig_path.display(),
            state_dir.display()
        );

        Ok(Self {
            kubeconfig_path,
            state_dir,
        })
    }
}

/// First non-empty entry of a platform path list
fn first_path(list: &Path) -> Option<PathBuf> {
    std::env::split_paths(list.as_os_str()).find(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefixes_do_not_overlap() {
        assert!(!state::FAVORITE_CONTEXT_PREFIX.starts_with(state::FAVORITE_NAMESPACE_PREFIX));
        assert!(!state::FAVORITE_NAMESPACE_PREFIX.starts_with(state::FAVORITE_CONTEXT_PREFIX));
    }

    #[test]
    fn test_explicit_kubeconfig_wins() {
        let settings = Settings::resolve(Some(Path::new("/tmp/kube/custom"))).unwrap();
        assert_eq!(settings.kubeconfig_path, PathBuf::from("/tmp/kube/custom"));
        assert!(settings.state_dir.ends_with(state::DIR_NAME));
    }

    #[cfg(unix)]
    #[test]
    fn test_path_list_uses_first_entry() {
        let settings = Settings::resolve(Some(Path::new(":/tmp/a:/tmp/b"))).unwrap();
        assert_eq!(settings.kubeconfig_path, PathBuf::from("/tmp/a"));
    }

    #[test]
    fn test_default_kubeconfig_under_home() {
        let settings = Settings::resolve(None).unwrap();
        assert!(settings.kubeconfig_path.ends_with(".kube/config"));
    }
}
