//! Kubeconfig file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SkError};

use super::models::KubeConfig;

/// Loads and persists the kubeconfig document
pub trait ConfigGateway {
    /// Read and parse the kubeconfig
    fn load(&self) -> Result<KubeConfig>;

    /// Write the kubeconfig back to its source
    fn persist(&self, config: &KubeConfig) -> Result<()>;
}

/// Kubeconfig stored in a single YAML file
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path actually written: symlinks are followed so a linked kubeconfig stays linked
    fn target_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

impl ConfigGateway for FileGateway {
    fn load(&self) -> Result<KubeConfig> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SkError::Config(format!(
                "Failed to read kubeconfig {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let config: KubeConfig = serde_yml::from_str(&content).map_err(|e| {
            SkError::Config(format!(
                "Failed to parse kubeconfig {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded kubeconfig {} ({} contexts, current '{}')",
            self.path.display(),
            config.contexts.len(),
            config.current_context
        );
        Ok(config)
    }

    /// Uses atomic write (tmp file + rename)
    fn persist(&self, config: &KubeConfig) -> Result<()> {
        let target = self.target_path();

        let yaml = serde_yml::to_string(config)
            .map_err(|e| SkError::Config(format!("Failed to serialize kubeconfig: {}", e)))?;

        let tmp_path = target.with_extension("sk.tmp");
        fs::write(&tmp_path, &yaml).map_err(|e| {
            SkError::Config(format!(
                "Failed to write temp kubeconfig {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Kubeconfigs carry credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                SkError::Config(format!("Failed to set permissions on kubeconfig: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &target).map_err(|e| {
            SkError::Config(format!(
                "Failed to rename temp kubeconfig to {}: {}",
                target.display(),
                e
            ))
        })?;

        debug!("Persisted kubeconfig {}", target.display());
        Ok(())
    }
}
