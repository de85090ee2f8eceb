//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::required;
use crate::error::CycleSearchError;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub paths: Vec<PathBuf>,
    pub format: GraphFormat,
    /// Destination file, stdout when `None`
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, CycleSearchError> {
        Ok(RenderOptions {
            paths: required(self.paths, "paths")?,
            format: required(self.format, "format")?,
            output: required(self.output, "output")?,
            highlight_cycles: required(self.highlight_cycles, "highlight_cycles")?,
        })
    }
}
