//! Spotlight command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::required;
use crate::error::CycleSearchError;

/// Configuration for the spotlight command
#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    /// Label of the node every reported cycle must pass through
    pub node: String,
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpotlightConfigBuilder {
    node: Option<String>,
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
}

impl SpotlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
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
}

impl crate::common::ConfigBuilder for SpotlightConfigBuilder {
    type Config = SpotlightConfig;

    fn build(self) -> Result<Self::Config, CycleSearchError> {
        let node = required(self.node, "node")?;
        if node.is_empty() {
            return Err(CycleSearchError::ConfigurationError {
                message: "Node label must not be empty".to_string(),
            });
        }

        Ok(SpotlightConfig {
            node,
            paths: required(self.paths, "paths")?,
            format: required(self.format, "format")?,
            max_cycles: required(self.max_cycles, "max_cycles")?,
        })
    }
}
