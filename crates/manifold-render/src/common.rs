//! Sub-renderers for the standard supporting objects every component uses.

use std::collections::BTreeMap;

use manifold_common::constants::{APP_NAME, CORE_API_VERSION, LABEL_APP, LABEL_COMPONENT};
use manifold_common::error::Result;
use manifold_common::types::{DeployableObject, ObjectMeta};
use serde_json::Value;

use crate::context::RenderContext;
use crate::renderer::Renderer;

/// Labels attached to every object a component emits.
#[must_use]
pub fn default_labels(component: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (LABEL_APP.to_string(), APP_NAME.to_string()),
        (LABEL_COMPONENT.to_string(), component.to_string()),
    ])
}

/// Metadata for an object named after its component, in the context namespace.
#[must_use]
pub fn component_meta(ctx: &RenderContext, component: &str) -> ObjectMeta {
    ObjectMeta::new(component)
        .namespace(ctx.namespace())
        .labels(default_labels(component))
}

/// Renders the service account a component's workloads run as.
///
/// Token automounting is off; components that talk to the platform API
/// opt in on their own workloads.
pub fn default_service_account(component: &'static str) -> impl Renderer {
    move |ctx: &RenderContext| -> Result<Vec<DeployableObject>> {
        Ok(vec![
            DeployableObject::new(
                CORE_API_VERSION,
                "ServiceAccount",
                component_meta(ctx, component),
            )
            .field("automountServiceAccountToken", Value::Bool(false))?,
        ])
    }
}

/// Renders a config map named after the component, filled by `data`.
///
/// A failure in `data` is returned unchanged and nothing is emitted.
pub fn config_map<F>(component: &'static str, data: F) -> impl Renderer
where
    F: Fn(&RenderContext) -> Result<BTreeMap<String, String>> + Send + Sync,
{
    move |ctx: &RenderContext| -> Result<Vec<DeployableObject>> {
        let data = serde_json::to_value(data(ctx)?)?;
        Ok(vec![
            DeployableObject::new(CORE_API_VERSION, "ConfigMap", component_meta(ctx, component))
                .field("data", data)?,
        ])
    }
}
