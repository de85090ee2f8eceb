//! Command implementations for the johnson-cycles CLI
//!
//! - search: list every elementary cycle
//! - spotlight: list the cycles through one node
//! - components: list the strongly connected components searched
//! - render: draw a graph with its cycles highlighted

pub mod components;
pub mod render;
pub mod search;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Search { .. } => search::execute_search_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
        Commands::Components { .. } => components::execute_components_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
