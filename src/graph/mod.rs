//! # Graph Representation and Rendering Module
//!
//! This module turns boolean adjacency matrices into adjacency lists and
//! renders graphs for humans.
//!
//! ## Components
//!
//! ### Graph Building
//! - **build_adjacency_list**: Converts an n×n matrix to successor lists
//! - **AdjacencyList**: Successor lists plus the induced-subgraph helpers
//!   used by the component search
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as ASCII, Mermaid or DOT
//! - Edges that lie on a detected cycle can be highlighted
//!
//! ## Example
//!
//! ```
//! use johnson_cycles::graph::{GraphRenderer, build_adjacency_list};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = vec![vec![false, true], vec![true, false]];
//! let adj_list = build_adjacency_list(&matrix)?;
//! assert_eq!(adj_list.successors(0), &[1]);
//!
//! let labels = vec!["core".to_string(), "app".to_string()];
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&adj_list, &labels, &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("core"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::build_adjacency_list;
pub use renderer::GraphRenderer;
pub use types::AdjacencyList;
