//! Kubeconfig data models

use serde::{Deserialize, Deserializer, Serialize};
use serde_yml::Value;
use std::collections::BTreeMap;

use crate::error::{Result, SkError};
use crate::selection::Selection;

/// Top-level kubeconfig document.
///
/// Only `current-context` and each context's `namespace` are interpreted;
/// everything else is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubeConfig {
    /// Name of the currently active context
    #[serde(
        rename = "current-context",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub current_context: String,
    /// Named context entries, in file order
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// A `contexts[]` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: ContextEntry,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// The body of a context entry (cluster, user, namespace, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// kubectl writes empty lists and unset values as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl KubeConfig {
    /// Context names in file order
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.iter().map(|c| c.name.clone()).collect()
    }

    fn find(&self, name: &str) -> Option<&NamedContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Namespace recorded for `context`; empty if unset or unknown
    pub fn namespace_of(&self, context: &str) -> String {
        self.find(context)
            .map(|c| c.context.namespace.clone())
            .unwrap_or_default()
    }

    /// Current selection, `None` when no current context was ever set
    pub fn current_selection(&self) -> Option<Selection> {
        if self.current_context.is_empty() {
            return None;
        }
        Some(Selection::new(
            self.current_context.clone(),
            self.namespace_of(&self.current_context),
        ))
    }

    /// Make `selection` current: switch context and set its namespace
    pub fn apply(&mut self, selection: &Selection) -> Result<()> {
        self.set_current_context(&selection.context)?;
        self.set_namespace(&selection.context, &selection.namespace)
    }

    /// Switch the current context, keeping that context's namespace
    pub fn set_current_context(&mut self, context: &str) -> Result<()> {
        if self.find(context).is_none() {
            return Err(self.missing_context(context));
        }
        self.current_context = context.to_string();
        Ok(())
    }

    /// Set the namespace of an existing context entry
    pub fn set_namespace(&mut self, context: &str, namespace: &str) -> Result<()> {
        match self.contexts.iter_mut().find(|c| c.name == context) {
            Some(entry) => {
                entry.context.namespace = namespace.to_string();
                Ok(())
            }
            None => Err(self.missing_context(context)),
        }
    }

    fn missing_context(&self, context: &str) -> SkError {
        SkError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            context,
            self.context_names().join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: dev-cluster
  cluster:
    server: https://dev.example.com
contexts:
- name: dev
  context:
    cluster: dev-cluster
    user: dev-user
    namespace: team-a
- name: prod
  context:
    cluster: prod-cluster
    user: prod-user
current-context: dev
preferences: {}
users:
- name: dev-user
  user:
    token: secret
"#;

    fn sample() -> KubeConfig {
        serde_yml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_current_selection() {
        let cfg = sample();
        assert_eq!(cfg.current_selection(), Some(Selection::new("dev", "team-a")));
    }

    #[test]
    fn test_current_selection_absent_without_current_context() {
        let cfg: KubeConfig = serde_yml::from_str("contexts: []").unwrap();
        assert!(cfg.current_selection().is_none());
    }

    #[test]
    fn test_current_context_missing_entry_has_empty_namespace() {
        let mut cfg = sample();
        cfg.current_context = "gone".to_string();
        assert_eq!(cfg.current_selection(), Some(Selection::new("gone", "")));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let cfg: KubeConfig =
            serde_yml::from_str("contexts: null\ncurrent-context: null\nusers: null\n").unwrap();
        assert!(cfg.contexts.is_empty());
        assert!(cfg.current_selection().is_none());
        assert!(cfg.other.contains_key("users"));
    }

    #[test]
    fn test_context_without_body() {
        let cfg: KubeConfig =
            serde_yml::from_str("contexts:\n- name: bare\n  context: null\ncurrent-context: bare\n")
                .unwrap();
        assert_eq!(cfg.current_selection(), Some(Selection::new("bare", "")));
    }

    #[test]
    fn test_context_names_keep_file_order() {
        assert_eq!(sample().context_names(), vec!["dev", "prod"]);
    }

    #[test]
    fn test_apply_sets_namespace_of_target_context() {
        let mut cfg = sample();
        cfg.apply(&Selection::new("prod", "payments")).unwrap();
        assert_eq!(cfg.current_context, "prod");
        assert_eq!(cfg.namespace_of("prod"), "payments");
        assert_eq!(cfg.namespace_of("dev"), "team-a");
    }

    #[test]
    fn test_apply_unknown_context_errors() {
        let mut cfg = sample();
        let err = cfg.apply(&Selection::new("staging", "x")).unwrap_err();
        assert!(matches!(err, SkError::Config(_)));
        assert!(err.to_string().contains("staging"));
        assert_eq!(cfg.current_context, "dev");
    }

    #[test]
    fn test_unknown_fields_roundtrip() {
        let mut cfg = sample();
        cfg.apply(&Selection::new("prod", "payments")).unwrap();

        let yaml = serde_yml::to_string(&cfg).unwrap();
        let value: Value = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(value["apiVersion"], Value::from("v1"));
        assert_eq!(value["kind"], Value::from("Config"));
        assert_eq!(
            value["clusters"][0]["cluster"]["server"],
            Value::from("https://dev.example.com")
        );
        assert_eq!(value["users"][0]["user"]["token"], Value::from("secret"));
        assert_eq!(value["contexts"][1]["context"]["user"], Value::from("prod-user"));
        assert_eq!(value["contexts"][1]["context"]["namespace"], Value::from("payments"));
        assert_eq!(value["current-context"], Value::from("prod"));
    }
}
