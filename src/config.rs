use crate::error::{LineageError, Result};

/// Selector label that carries the owning controller's uid on generated Jobs.
pub const CONTROLLER_UID_LABEL: &str = "controller-uid";

/// Configuration for a job model instance.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Namespace the lister is scoped to. Empty means all namespaces.
    pub namespace: String,
    /// Selector label compared against the parent uid root
    pub selector_label: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            selector_label: CONTROLLER_UID_LABEL.to_string(),
        }
    }
}

impl ModelConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_selector_label(mut self, label: impl Into<String>) -> Self {
        self.selector_label = label.into();
        self
    }
}

/// Request parameters identifying the parent CronJob for one list call.
///
/// The scope path is mandatory and validated here, so a constructed
/// `ParentRef` always has a parent name to match against. The parent uid is
/// optional; without it the job listing is returned unfiltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    parent_uid: Option<String>,
    scope_path: String,
}

impl ParentRef {
    pub fn new(parent_uid: Option<String>, scope_path: Option<String>) -> Result<Self> {
        let scope_path = scope_path.ok_or(LineageError::MissingScope)?;
        if parent_uid.is_none() {
            tracing::debug!(path = %scope_path, "No parent uid in request");
        }
        Ok(Self {
            parent_uid,
            scope_path,
        })
    }

    /// The parent uid, if one was supplied and is non-empty.
    pub fn parent_uid(&self) -> Option<&str> {
        self.parent_uid.as_deref().filter(|uid| !uid.is_empty())
    }

    pub fn scope_path(&self) -> &str {
        &self.scope_path
    }

    pub fn parent_namespace(&self) -> &str {
        namespaced(&self.scope_path).0
    }

    pub fn parent_name(&self) -> &str {
        namespaced(&self.scope_path).1
    }

    /// Returns true if this request narrows the listing to one parent.
    pub fn is_filtered(&self) -> bool {
        self.parent_uid().is_some()
    }
}

/// Split a `namespace/name` path at its last `/`.
///
/// A path without a `/` is all name with an empty namespace.
pub fn namespaced(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((ns, name)) => (ns.trim_matches('/'), name),
        None => ("", path),
    }
}
