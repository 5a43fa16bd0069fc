//! Catalog of concrete component renderers.
//!
//! Every component is gated by its own configuration section and renders
//! nothing while that section is absent or disabled.

pub mod toxiproxy;

use manifold_common::error::Result;
use manifold_common::types::DeployableObject;

use crate::context::RenderContext;
use crate::renderer::Renderer;

/// A named entry in the component catalog.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Component name, also used for object names and labels.
    pub name: &'static str,
    /// Renders the component's objects.
    pub objects: fn(&RenderContext) -> Result<Vec<DeployableObject>>,
}

impl Renderer for Component {
    fn render(&self, ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
        (self.objects)(ctx)
    }
}

/// Components deployed alongside the web application.
pub const WEB_APP: &[Component] = &[Component {
    name: toxiproxy::COMPONENT,
    objects: toxiproxy::objects,
}];

/// Components deployed into workspace clusters.
pub const WORKSPACE: &[Component] = &[];
