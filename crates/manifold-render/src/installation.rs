//! Top-level renderer for a whole installation.

use manifold_common::error::{ManifoldError, Result};
use manifold_common::types::DeployableObject;

use crate::components::{self, Component};
use crate::context::RenderContext;
use crate::namespace::with_default_namespace;
use crate::renderer::{Composite, Renderer};

/// Returns the catalog components the context's installation kind deploys,
/// in render order.
#[must_use]
pub fn components_for(ctx: &RenderContext) -> Vec<Component> {
    let kind = ctx.config().kind;
    let mut selected = Vec::new();
    if kind.includes_web_app() {
        selected.extend_from_slice(components::WEB_APP);
    }
    if kind.includes_workspace() {
        selected.extend_from_slice(components::WORKSPACE);
    }
    selected
}

/// Returns the renderer for a complete installation: every selected
/// component in catalog order, with namespaces defaulted.
pub fn installation() -> impl Renderer {
    with_default_namespace(render_components)
}

fn render_components(ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
    validate(ctx)?;

    let selected = components_for(ctx);
    tracing::debug!(
        kind = %ctx.config().kind,
        components = selected.len(),
        "rendering installation"
    );

    let objects = selected
        .into_iter()
        .fold(Composite::new(), Composite::then)
        .render(ctx)?;
    tracing::info!(
        namespace = ctx.namespace(),
        objects = objects.len(),
        "installation rendered"
    );
    Ok(objects)
}

fn validate(ctx: &RenderContext) -> Result<()> {
    if ctx.config().domain.trim().is_empty() {
        return Err(ManifoldError::Config {
            message: "domain must not be empty".into(),
        });
    }
    if ctx.namespace().trim().is_empty() {
        return Err(ManifoldError::Config {
            message: "namespace must not be empty".into(),
        });
    }
    Ok(())
}
