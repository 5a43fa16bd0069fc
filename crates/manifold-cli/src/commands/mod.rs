//! CLI command definitions and dispatch.

pub mod components;
pub mod render;

use clap::{Parser, Subcommand};

/// Manifold — Composable installer manifest renderer.
#[derive(Parser, Debug)]
#[command(name = "mfd", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the installation's objects as a YAML stream.
    Render(render::RenderArgs),
    /// List the components in the catalog.
    Components(components::ComponentsArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Render(args) => render::execute(&args),
        Command::Components(args) => components::execute(&args),
    }
}
