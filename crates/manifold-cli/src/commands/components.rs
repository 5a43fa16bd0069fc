//! `mfd components` — List the component catalog.

use clap::Args;
use manifold_render::components::{WEB_APP, WORKSPACE};

/// Arguments for the `components` command.
#[derive(Args, Debug)]
pub struct ComponentsArgs {}

/// Executes the `components` command.
///
/// # Errors
///
/// This command does not currently fail.
pub fn execute(_args: &ComponentsArgs) -> anyhow::Result<()> {
    for component in WEB_APP {
        println!("{:<20} webapp", component.name);
    }
    for component in WORKSPACE {
        println!("{:<20} workspace", component.name);
    }
    Ok(())
}
