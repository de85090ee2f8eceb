use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(johnson_cycles::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(johnson_cycles::json_parse_error),
    help("Check the JSON syntax and field types near the highlighted position")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid JSON here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleSearchError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(johnson_cycles::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(johnson_cycles::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(johnson_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(johnson_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(johnson_cycles::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    #[diagnostic(
        code(johnson_cycles::non_square_matrix),
        help("Every row of an n×n adjacency matrix must have exactly n entries")
    )]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Got {labels} node labels for a graph with {nodes} nodes")]
    #[diagnostic(
        code(johnson_cycles::label_count_mismatch),
        help("Provide exactly one label per node, or omit the labels entirely")
    )]
    LabelCountMismatch { labels: usize, nodes: usize },

    #[error("Edge {from} -> {to} references a node outside 0..{node_count}")]
    #[diagnostic(
        code(johnson_cycles::edge_out_of_range),
        help("Edge endpoints are 0-based node indices")
    )]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },

    #[error("Invalid graph file '{path}': {message}")]
    #[diagnostic(
        code(johnson_cycles::invalid_graph_file),
        help("A graph file needs exactly one of `matrix` or `edges`, and `edges` needs `nodes` or `node_count`")
    )]
    InvalidGraphFile { path: PathBuf, message: String },

    #[error("Unsupported input file '{path}'")]
    #[diagnostic(
        code(johnson_cycles::unsupported_input),
        help("Graph files must end in .json or .toml")
    )]
    UnsupportedInput { path: PathBuf },

    #[error("Node '{label}' does not appear in any graph")]
    #[diagnostic(
        code(johnson_cycles::node_not_found),
        help("Node names are matched exactly against the `nodes` list of each graph file")
    )]
    NodeNotFound { label: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "matrix = [[true,";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "graph.toml".to_string(),
            source_code: NamedSource::new("graph.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'graph.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CycleSearchError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_non_square_matrix() {
        let error = CycleSearchError::NonSquareMatrix {
            row: 2,
            len: 3,
            expected: 4,
        };

        assert_eq!(
            error.to_string(),
            "Adjacency matrix is not square: row 2 has 3 entries, expected 4"
        );
    }

    #[test]
    fn test_label_count_mismatch() {
        let error = CycleSearchError::LabelCountMismatch {
            labels: 3,
            nodes: 10,
        };

        assert_eq!(error.to_string(), "Got 3 node labels for a graph with 10 nodes");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = CycleSearchError::EdgeOutOfRange {
            from: 0,
            to: 12,
            node_count: 10,
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: CycleSearchError = io_err.into();

        match err {
            CycleSearchError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: CycleSearchError = json_err.into();

        match err {
            CycleSearchError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
