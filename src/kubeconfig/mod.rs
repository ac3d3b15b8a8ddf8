//! Kubeconfig access
//!
//! Reads the cluster-client configuration, exposes the current
//! context/namespace and writes a new selection back without touching
//! fields this tool doesn't own.

mod gateway;
mod models;

pub use gateway::{ConfigGateway, FileGateway};
pub use models::{ContextEntry, KubeConfig, NamedContext};
