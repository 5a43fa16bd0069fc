//! Accessors for optional, nested configuration sections.
//!
//! Each accessor descends one fixed path and yields `None` as soon as a
//! section on that path is missing. A missing section means "disabled",
//! never an error.

use manifold_common::config::{ToxiproxyConfig, WebAppConfig};

use crate::context::RenderContext;

/// Resolves `experimental.webApp`.
#[must_use]
pub fn experimental_web_app(ctx: &RenderContext) -> Option<&WebAppConfig> {
    ctx.experimental()?.web_app.as_ref()
}

/// Resolves `experimental.webApp.toxiproxy`.
#[must_use]
pub fn experimental_toxiproxy(ctx: &RenderContext) -> Option<&ToxiproxyConfig> {
    experimental_web_app(ctx)?.toxiproxy.as_ref()
}
