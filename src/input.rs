//! Graph file parsing
//!
//! A graph file is JSON or TOML with optional `nodes` labels and exactly one
//! of `matrix` (square rows of booleans) or `edges` (`[from, to]` index
//! pairs):
//!
//! ```toml
//! nodes = ["core", "app", "tools"]
//! edges = [[0, 1], [1, 2], [2, 0]]
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::core::GraphDefinition;
use crate::error::{CycleSearchError, JsonParseError, TomlParseError};
use crate::graph::{AdjacencyList, build_adjacency_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(InputFormat::Json),
            "toml" => Some(InputFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub nodes: Option<Vec<String>>,
    pub node_count: Option<usize>,
    pub matrix: Option<Vec<Vec<bool>>>,
    pub edges: Option<Vec<(usize, usize)>>,
}

impl GraphFile {
    /// Read and validate a graph file, choosing the parser by extension
    pub fn parse_file(path: &Path) -> Result<GraphDefinition, CycleSearchError> {
        let format = InputFormat::from_path(path).ok_or_else(|| {
            CycleSearchError::UnsupportedInput {
                path: path.to_path_buf(),
            }
        })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| CycleSearchError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, format, path)?.into_definition(path)
    }

    /// Parse file contents without validating the graph
    pub fn parse_str(
        content: &str,
        format: InputFormat,
        path: &Path,
    ) -> Result<Self, CycleSearchError> {
        let file = path.display().to_string();

        match format {
            InputFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                CycleSearchError::TomlParseError(Box::new(TomlParseError {
                    file: file.clone(),
                    source_code: NamedSource::new(file, content.to_string()),
                    span,
                    source: e,
                }))
            }),
            InputFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = json_error_offset(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));

                CycleSearchError::JsonParseError(Box::new(JsonParseError {
                    file: file.clone(),
                    source_code: NamedSource::new(file, content.to_string()),
                    span,
                    source: e,
                }))
            }),
        }
    }

    /// Validate the file and build the graph it describes
    pub fn into_definition(self, path: &Path) -> Result<GraphDefinition, CycleSearchError> {
        let invalid = |message: &str| CycleSearchError::InvalidGraphFile {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        let adj_list = match (self.matrix, self.edges) {
            (Some(_), Some(_)) => return Err(invalid("both `matrix` and `edges` are set")),
            (None, None) => return Err(invalid("one of `matrix` or `edges` is required")),
            (Some(matrix), None) => {
                if self.node_count.is_some_and(|n| n != matrix.len()) {
                    return Err(invalid("`node_count` does not match the matrix size"));
                }
                build_adjacency_list(&matrix)?
            }
            (None, Some(edges)) => {
                let node_count = match (self.node_count, self.nodes.as_ref()) {
                    (Some(n), _) => n,
                    (None, Some(nodes)) => nodes.len(),
                    (None, None) => {
                        return Err(invalid("`edges` needs `nodes` or `node_count`"));
                    }
                };
                AdjacencyList::from_edges(node_count, edges)?
            }
        };

        let labels = match self.nodes {
            Some(nodes) if nodes.len() != adj_list.len() => {
                return Err(CycleSearchError::LabelCountMismatch {
                    labels: nodes.len(),
                    nodes: adj_list.len(),
                });
            }
            Some(nodes) => nodes,
            None => (0..adj_list.len()).map(|i| i.to_string()).collect(),
        };

        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(GraphDefinition {
            name,
            path: path.to_path_buf(),
            labels,
            adj_list,
        })
    }
}

/// Byte offset of a 1-based `line`/`column` position reported by serde_json
fn json_error_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len().saturating_sub(1)))
}
