//! # Strongly Connected Components
//!
//! Johnson's cycle search needs, for a growing floor `s`, the strongly
//! connected component that holds the least vertex of the subgraph induced
//! by `{s, s + 1, ..., n - 1}`. This module computes it with Tarjan's
//! algorithm, recomputed on every query over the shrinking subgraph.
//!
//! For the algorithms see:
//!
//! - Robert Tarjan: *Depth-first search and linear graph algorithms*. SIAM
//!   Journal on Computing 1(2), 1972, pp. 146-160.
//! - Donald B. Johnson: *Finding all the elementary circuits of a directed
//!   graph*. SIAM Journal on Computing 4(1), 1975, pp. 77-84.
//!
//! ## Example
//!
//! ```
//! use johnson_cycles::graph::build_adjacency_list;
//! use johnson_cycles::scc::StrongConnectedComponents;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 -> 1 -> 0 and 2 -> 3 -> 2
//! let matrix = vec![
//!     vec![false, true, false, false],
//!     vec![true, false, true, false],
//!     vec![false, false, false, true],
//!     vec![false, false, true, false],
//! ];
//! let adj_list = build_adjacency_list(&matrix)?;
//! let finder = StrongConnectedComponents::new(&adj_list);
//!
//! let roots: Vec<usize> = finder
//!     .lowest_components()
//!     .map(|scc| scc.lowest_node_id())
//!     .collect();
//! assert_eq!(roots, vec![0, 2]);
//! # Ok(())
//! # }
//! ```

mod finder;

pub use finder::{LowestComponents, SccResult, StrongConnectedComponents};
