//! Search command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SearchConfig;
use crate::error::CycleSearchError;

impl FromCommand for SearchConfig {
    fn from_command(command: Commands) -> Result<Self, CycleSearchError> {
        match command {
            Commands::Search {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => SearchConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(CycleSearchError::ConfigurationError {
                message: "Invalid command type for SearchConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SearchConfig);

/// Execute the search command listing all elementary cycles
pub fn execute_search_command(command: Commands) -> Result<()> {
    let config = SearchConfig::from_command(command)
        .wrap_err("Failed to parse search command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::search::SearchExecutor;
    SearchExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_from_search_command() {
        let cli = Cli::try_parse_from(["johnson-cycles", "search", "a.json", "--format", "github"])
            .unwrap();
        let config = SearchConfig::try_from(cli.command).unwrap();

        assert_eq!(config.paths, vec![std::path::PathBuf::from("a.json")]);
        assert_eq!(config.format, OutputFormat::GitHub);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_wrong_command_rejected() {
        let cli = Cli::try_parse_from(["johnson-cycles", "components"]).unwrap();
        assert!(SearchConfig::from_command(cli.command).is_err());
    }
}
