//! System-wide constants and label keys.

/// Application name used in object labels.
pub const APP_NAME: &str = "manifold";

/// Namespace used when the installer is not told otherwise.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default configuration document name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "manifold.yaml";

/// Label key identifying the owning application.
pub const LABEL_APP: &str = "app";

/// Label key identifying the component that emitted an object.
pub const LABEL_COMPONENT: &str = "component";

/// `apiVersion` of core objects (config maps, service accounts).
pub const CORE_API_VERSION: &str = "v1";
