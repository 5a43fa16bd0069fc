//! `mfd render` — Render every object of an installation.

use std::path::PathBuf;

use clap::Args;
use manifold_common::config::InstallerConfig;
use manifold_common::constants::{DEFAULT_CONFIG_FILE, DEFAULT_NAMESPACE};
use manifold_render::context::RenderContext;
use manifold_render::installation::installation;
use manifold_render::renderer::Renderer;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the configuration document.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Namespace to render objects into.
    #[arg(short, long, env = "MANIFOLD_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `render` command.
///
/// Loads the configuration document, renders the installation, and
/// writes the objects as a `---`-separated YAML stream.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, rendering fails,
/// or the output cannot be written.
pub fn execute(args: &RenderArgs) -> anyhow::Result<()> {
    tracing::info!(path = %args.config.display(), "loading configuration");
    let config = InstallerConfig::load(&args.config)?;
    let ctx = RenderContext::new(config).with_namespace(&args.namespace);

    let objects = installation().render(&ctx)?;
    let stream = crate::output::to_yaml_stream(&objects)?;

    if let Some(ref out_path) = args.output {
        std::fs::write(out_path, &stream)?;
        tracing::info!(path = %out_path.display(), objects = objects.len(), "manifests written");
    } else {
        print!("{stream}");
    }

    Ok(())
}
