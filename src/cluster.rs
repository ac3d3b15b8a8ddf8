//! Namespace enumeration against the cluster behind a context

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use k8s_openapi::api::core::v1::Namespace;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use log::debug;

use crate::error::{Result, SkError};
use crate::ui::{clear_spinner, create_spinner};

/// Source of namespace names for a context
pub trait NamespaceSource {
    fn list_namespaces(&self, context: &str) -> Result<Vec<String>>;
}

/// Lists namespaces through the Kubernetes API, using the credentials of the given context
pub struct KubeNamespaceSource {
    kubeconfig_path: PathBuf,
}

impl KubeNamespaceSource {
    pub fn new(kubeconfig_path: PathBuf) -> Self {
        Self { kubeconfig_path }
    }

    async fn fetch(&self, context: &str) -> Result<Vec<String>> {
        let kubeconfig = Kubeconfig::read_from(&self.kubeconfig_path).map_err(|e| {
            SkError::Cluster(format!(
                "Failed to read kubeconfig {}: {}",
                self.kubeconfig_path.display(),
                e
            ))
        })?;

        let opts = KubeConfigOptions {
            context: Some(context.to_string()),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &opts)
            .await
            .map_err(|e| {
                SkError::Cluster(format!(
                    "Failed to build client config for context '{}': {}",
                    context, e
                ))
            })?;
        let client = Client::try_from(config).map_err(|e| {
            SkError::Cluster(format!(
                "Failed to create client for context '{}': {}",
                context, e
            ))
        })?;

        let api: Api<Namespace> = Api::all(client);
        let list = api.list(&ListParams::default()).await.map_err(|e| {
            SkError::Cluster(format!(
                "Failed to list namespaces for context '{}': {}",
                context, e
            ))
        })?;

        Ok(list
            .items
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect())
    }
}

impl NamespaceSource for KubeNamespaceSource {
    fn list_namespaces(&self, context: &str) -> Result<Vec<String>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SkError::Cluster(format!("Failed to start async runtime: {}", e)))?;

        let spinner = create_spinner(
            &format!("Fetching namespaces for context '{}'...", context),
            !io::stderr().is_terminal(),
        );
        let result = runtime.block_on(self.fetch(context));
        clear_spinner(spinner);

        let namespaces = result?;
        debug!(
            "Found {} namespaces for context '{}'",
            namespaces.len(),
            context
        );
        Ok(namespaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_kubeconfig_is_cluster_error() {
        let dir = TempDir::new().unwrap();
        let source = KubeNamespaceSource::new(dir.path().join("absent"));
        let err = source.list_namespaces("dev").unwrap_err();
        assert!(matches!(err, SkError::Cluster(_)));
        assert!(err.to_string().contains("Failed to read kubeconfig"));
    }

    #[test]
    fn test_unknown_context_is_cluster_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        std::fs::write(
            &path,
            "apiVersion: v1\nkind: Config\nclusters: []\ncontexts: []\nusers: []\n",
        )
        .unwrap();
        let source = KubeNamespaceSource::new(path);
        let err = source.list_namespaces("missing").unwrap_err();
        assert!(matches!(err, SkError::Cluster(_)));
        assert!(err.to_string().contains("missing"));
    }
}
