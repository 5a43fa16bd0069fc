//! Namespace defaulting for rendered objects.

use manifold_common::error::Result;
use manifold_common::types::DeployableObject;

use crate::context::RenderContext;
use crate::renderer::Renderer;

/// Wraps a renderer so that every object it emits without a namespace is
/// placed in the context namespace. Objects that already name one keep it.
#[derive(Debug)]
pub struct DefaultNamespace<R> {
    inner: R,
}

/// Wraps `inner` with namespace defaulting.
pub const fn with_default_namespace<R: Renderer>(inner: R) -> DefaultNamespace<R> {
    DefaultNamespace { inner }
}

impl<R: Renderer> Renderer for DefaultNamespace<R> {
    fn render(&self, ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
        let mut objects = self.inner.render(ctx)?;
        for object in &mut objects {
            if object.metadata.namespace.is_none() {
                object.metadata.namespace = Some(ctx.namespace().to_string());
            }
        }
        Ok(objects)
    }
}
