//! # Cycle Detection Module
//!
//! This module enumerates every elementary cycle of a directed graph.
//!
//! ## Algorithm
//!
//! We use Johnson's algorithm. The graph is processed one strongly connected
//! component at a time, always picking the component that holds the least
//! node of the remaining subgraph (see [`crate::scc`]). Inside that
//! component a depth-first search rooted at its least node reports every
//! path that closes back on the root. Nodes that cannot currently reach the
//! root stay *blocked* until one of their successors does, which bounds the
//! running time by O((V + E)(C + 1)) for C cycles.
//!
//! ## Key Components
//!
//! - **CycleDetector**: Runs the search and keeps the cycles it found
//! - **Cycle**: One elementary cycle, as a sequence of node payloads
//!
//! ## Example
//!
//! ```
//! use johnson_cycles::detector::CycleDetector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // a -> b -> a
//! let matrix = vec![vec![false, true], vec![true, false]];
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&matrix, &["a", "b"])?;
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(detector.cycles()[0].nodes(), &["a", "b"]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
