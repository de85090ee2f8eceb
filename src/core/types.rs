//! Core type definitions
//!
//! Plain data shared between input loading, the search executors and the
//! report generators.

use std::path::PathBuf;

use crate::detector::Cycle;
use crate::graph::AdjacencyList;

/// A graph loaded from an input file
#[derive(Debug, Clone)]
pub struct GraphDefinition {
    /// Display name, taken from the file stem
    pub name: String,
    pub path: PathBuf,
    /// One label per node
    pub labels: Vec<String>,
    pub adj_list: AdjacencyList,
}

impl GraphDefinition {
    pub fn node_count(&self) -> usize {
        self.adj_list.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj_list.edge_count()
    }

    /// Index of the node labelled `label`, if any
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// The cycles found in one graph
#[derive(Debug, Clone)]
pub struct GraphCycles {
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub cycles: Vec<Cycle<String>>,
}

impl GraphCycles {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}

/// Total number of cycles across several graphs
pub fn total_cycles(results: &[GraphCycles]) -> usize {
    results.iter().map(GraphCycles::cycle_count).sum()
}
