//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::CycleSearchError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, CycleSearchError> {
        match command {
            Commands::Render {
                common,
                format,
                output,
                highlight_cycles,
            } => RenderOptions::builder()
                .with_paths(common.get_paths())
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(CycleSearchError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for graph visualization
pub fn execute_render_command(command: Commands) -> Result<()> {
    let options = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(options)
}
