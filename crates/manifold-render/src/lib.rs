//! # manifold-render
//!
//! Turns an installer configuration into the ordered list of deployable
//! objects for an installation.
//!
//! Handles:
//! - **Context**: The immutable [`RenderContext`](context::RenderContext) shared by every renderer.
//! - **Resolver**: Accessors descending through optional configuration sections.
//! - **Renderer**: The [`Renderer`](renderer::Renderer) contract and ordered, short-circuiting composition.
//! - **Common**: Standard supporting objects (service accounts, config maps, labels).
//! - **Namespace**: Namespace defaulting for emitted objects.
//! - **Components**: The catalog of concrete component renderers.
//! - **Installation**: The top-level renderer for a whole installation.
//!
//! # Example
//!
//! ```rust,no_run
//! use manifold_common::config::InstallerConfig;
//! use manifold_render::context::RenderContext;
//! use manifold_render::renderer::Renderer;
//!
//! let config = InstallerConfig::from_yaml("domain: example.com").expect("valid document");
//! let ctx = RenderContext::new(config).with_namespace("manifold");
//! let objects = manifold_render::installation::installation()
//!     .render(&ctx)
//!     .expect("render");
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod common;
pub mod components;
pub mod context;
pub mod installation;
pub mod namespace;
pub mod renderer;
pub mod resolver;
