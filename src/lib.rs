//! # Johnson Cycles - Enumerate Elementary Cycles of Directed Graphs
//!
//! Johnson Cycles lists every elementary cycle of a directed graph: every
//! closed path that visits no node twice. It implements Johnson's algorithm
//! on top of Tarjan's strongly connected components, searching one
//! component at a time so the total work stays bounded by
//! `O((n + e)(c + 1))` for `c` cycles.
//!
//! ## Main Components
//!
//! - **Graph**: adjacency lists built from matrices or edge lists, plus
//!   renderers
//! - **SCC**: finds the lowest strongly connected component of shrinking
//!   induced subgraphs
//! - **Detector**: Johnson's blocking search producing the cycles
//! - **Reports**: human-readable and machine-readable cycle listings
//!
//! ## Usage
//!
//! ### Enumerating cycles from an adjacency matrix
//!
//! ```
//! use johnson_cycles::detector::CycleDetector;
//!
//! # fn main() -> miette::Result<()> {
//! // 0 -> 1 -> 2 -> 0, plus 1 -> 0
//! let matrix = vec![
//!     vec![false, true, false],
//!     vec![true, false, true],
//!     vec![true, false, false],
//! ];
//! let labels = ["parser", "lexer", "ast"];
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&matrix, &labels)?;
//!
//! let cycles: Vec<Vec<&str>> = detector
//!     .cycles()
//!     .iter()
//!     .map(|cycle| cycle.nodes().to_vec())
//!     .collect();
//! assert_eq!(
//!     cycles,
//!     vec![vec!["parser", "lexer"], vec!["parser", "lexer", "ast"]]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Walking the components the search visits
//!
//! ```
//! use johnson_cycles::graph::AdjacencyList;
//! use johnson_cycles::scc::StrongConnectedComponents;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = AdjacencyList::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 2)])?;
//! let finder = StrongConnectedComponents::new(&graph);
//!
//! let roots: Vec<usize> = finder
//!     .lowest_components()
//!     .map(|scc| scc.lowest_node_id())
//!     .collect();
//! assert_eq!(roots, vec![0, 2]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a graph with its cycles
//!
//! ```no_run
//! use std::path::Path;
//!
//! use johnson_cycles::detector::CycleDetector;
//! use johnson_cycles::graph::GraphRenderer;
//! use johnson_cycles::input::GraphFile;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = GraphFile::parse_file(Path::new("deps.toml"))?;
//!
//! let indices: Vec<usize> = (0..graph.node_count()).collect();
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles_in(&graph.adj_list, &indices)?;
//!
//! let mut mermaid = Vec::new();
//! GraphRenderer::new(true).render_mermaid(
//!     &graph.adj_list,
//!     &graph.labels,
//!     detector.cycles(),
//!     &mut mermaid,
//! )?;
//! std::fs::write("deps.mmd", mermaid).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod input_discovery;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod reports;
pub mod scc;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
