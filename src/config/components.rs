//! Components command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::required;
use crate::error::CycleSearchError;

#[derive(Debug, Clone)]
pub struct ComponentsConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
}

impl ComponentsConfig {
    pub fn builder() -> ComponentsConfigBuilder {
        ComponentsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ComponentsConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
}

impl ComponentsConfigBuilder {
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
}

impl crate::common::ConfigBuilder for ComponentsConfigBuilder {
    type Config = ComponentsConfig;

    fn build(self) -> Result<Self::Config, CycleSearchError> {
        let format = required(self.format, "format")?;
        if format == OutputFormat::GitHub {
            return Err(CycleSearchError::ConfigurationError {
                message: "The components command supports only human and json output"
                    .to_string(),
            });
        }

        Ok(ComponentsConfig {
            paths: required(self.paths, "paths")?,
            format,
        })
    }
}
