//! Deployable object types emitted by renderers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ManifoldError, Result};

/// Top-level keys owned by the object's typed fields. The body never holds them.
pub const RESERVED_FIELDS: &[&str] = &["apiVersion", "kind", "metadata"];

/// Identifying metadata of a deployable object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Object name.
    pub name: String,
    /// Namespace the object lives in, if namespaced and already assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Labels attached to the object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Creates metadata with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            labels: BTreeMap::new(),
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Replaces the label set.
    #[must_use]
    pub fn labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

/// One named, typed resource ready for submission to the target platform.
///
/// Everything besides `apiVersion`, `kind` and `metadata` is carried as an
/// opaque body and serialized alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployableObject {
    /// API group and version, e.g. `v1`.
    pub api_version: String,
    /// Resource kind, e.g. `ConfigMap`.
    pub kind: String,
    /// Identifying metadata.
    pub metadata: ObjectMeta,
    #[serde(flatten)]
    body: Map<String, Value>,
}

impl DeployableObject {
    /// Creates an object with an empty body.
    #[must_use]
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>, metadata: ObjectMeta) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            metadata,
            body: Map::new(),
        }
    }

    /// Sets a top-level body field.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::ReservedField`] if `key` is one of
    /// [`RESERVED_FIELDS`].
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Result<Self> {
        let key = key.into();
        if RESERVED_FIELDS.contains(&key.as_str()) {
            return Err(ManifoldError::ReservedField { key });
        }
        let _ = self.body.insert(key, value);
        Ok(self)
    }

    /// Returns every top-level field besides `apiVersion`, `kind` and `metadata`.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl fmt::Display for DeployableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.metadata.name)
    }
}
