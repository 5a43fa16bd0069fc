//! The render context shared by all renderers of one pass.

use manifold_common::config::{ExperimentalConfig, InstallerConfig};
use manifold_common::constants::DEFAULT_NAMESPACE;

/// Read-only view of the deployment configuration for one render pass.
///
/// Built once per installer invocation and passed by reference to every
/// renderer. Nothing can mutate it after construction.
#[derive(Debug, Clone)]
pub struct RenderContext {
    config: InstallerConfig,
    namespace: String,
}

impl RenderContext {
    /// Creates a context targeting the default namespace.
    #[must_use]
    pub fn new(config: InstallerConfig) -> Self {
        Self {
            config,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Sets the namespace objects are rendered into.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Returns the full configuration document.
    #[must_use]
    pub const fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Returns the namespace objects are rendered into.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the experimental section, if present.
    #[must_use]
    pub const fn experimental(&self) -> Option<&ExperimentalConfig> {
        self.config.experimental.as_ref()
    }
}
