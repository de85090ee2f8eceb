//! Components command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ComponentsConfig;
use crate::error::CycleSearchError;

impl FromCommand for ComponentsConfig {
    fn from_command(command: Commands) -> Result<Self, CycleSearchError> {
        match command {
            Commands::Components { common, format } => ComponentsConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .build(),
            _ => Err(CycleSearchError::ConfigurationError {
                message: "Invalid command type for ComponentsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ComponentsConfig);

/// Execute the components command listing the searched SCCs
pub fn execute_components_command(command: Commands) -> Result<()> {
    let config = ComponentsConfig::from_command(command)
        .wrap_err("Failed to parse components command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::components::ComponentsExecutor;
    ComponentsExecutor::execute(config)
}
