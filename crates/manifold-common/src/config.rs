//! Installer configuration document model.
//!
//! Optional sections are `Option`s so an absent section can never be
//! confused with one that is present but empty.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ManifoldError, Result};

/// Root configuration for an installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstallerConfig {
    /// Which parts of the system this installation deploys.
    #[serde(default)]
    pub kind: InstallationKind,
    /// Public domain the installation is served from.
    #[serde(default)]
    pub domain: String,
    /// Unstable, opt-in features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<ExperimentalConfig>,
}

impl InstallerConfig {
    /// Parses a configuration document from YAML (or JSON) text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::Parse`] if the document is malformed or
    /// contains unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads and parses a configuration document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::Io`] if the file cannot be read, or
    /// [`ManifoldError::Parse`] if its content is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifoldError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }
}

/// Scope of an installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationKind {
    /// Every component.
    #[default]
    Full,
    /// Control-plane components only.
    Meta,
    /// Workspace-cluster components only.
    Workspace,
}

impl InstallationKind {
    /// Returns `true` if this kind deploys the web application.
    #[must_use]
    pub const fn includes_web_app(self) -> bool {
        matches!(self, Self::Full | Self::Meta)
    }

    /// Returns `true` if this kind deploys workspace-cluster components.
    #[must_use]
    pub const fn includes_workspace(self) -> bool {
        matches!(self, Self::Full | Self::Workspace)
    }
}

impl fmt::Display for InstallationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "Full"),
            Self::Meta => write!(f, "Meta"),
            Self::Workspace => write!(f, "Workspace"),
        }
    }
}

/// The `experimental` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperimentalConfig {
    /// Experimental web application settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppConfig>,
}

/// The `experimental.webApp` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebAppConfig {
    /// Fault-injection proxy in front of the web application's backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxiproxy: Option<ToxiproxyConfig>,
}

/// The `experimental.webApp.toxiproxy` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToxiproxyConfig {
    /// Whether the proxy is deployed.
    #[serde(default)]
    pub enabled: bool,
    /// Proxies to configure. Empty means the built-in default set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxies: Vec<ToxiproxyProxy>,
}

/// One proxy entry: traffic arriving on `listen` is forwarded to `upstream`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToxiproxyProxy {
    /// Proxy name, unique within the configuration.
    pub name: String,
    /// Address the proxy listens on.
    pub listen: String,
    /// Address traffic is forwarded to.
    pub upstream: String,
    /// Whether the proxy starts enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

const fn default_true() -> bool {
    true
}
