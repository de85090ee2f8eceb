//! Search command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::required;
use crate::error::CycleSearchError;

/// Configuration for the search command
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Graph files, directories or glob patterns
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of cycles to list per graph (None = all)
    pub max_cycles: Option<usize>,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SearchConfigBuilder {
    type Config = SearchConfig;

    fn build(self) -> Result<Self::Config, CycleSearchError> {
        Ok(SearchConfig {
            paths: required(self.paths, "paths")?,
            format: required(self.format, "format")?,
            max_cycles: required(self.max_cycles, "max_cycles")?,
            error_on_cycles: required(self.error_on_cycles, "error_on_cycles")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_build_complete() {
        let config = SearchConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Json)
            .with_max_cycles(None)
            .with_error_on_cycles(false)
            .build()
            .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.max_cycles, None);
    }

    #[test]
    fn test_build_missing_field() {
        let result = SearchConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(true)
            .build();

        match result {
            Err(CycleSearchError::ConfigurationError { message }) => {
                assert!(message.contains("max_cycles"));
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
