//! Spotlight command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpotlightConfig;
use crate::error::CycleSearchError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, CycleSearchError> {
        match command {
            Commands::Spotlight {
                node,
                common,
                format,
                cycle_display,
            } => SpotlightConfig::builder()
                .with_node(node)
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(CycleSearchError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for cycles through a single node
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_from_spotlight_command() {
        let cli = Cli::try_parse_from(["johnson-cycles", "spotlight", "core", "graphs"]).unwrap();
        let config = SpotlightConfig::try_from(cli.command).unwrap();

        assert_eq!(config.node, "core");
        assert_eq!(config.paths, vec![std::path::PathBuf::from("graphs")]);
    }
}
