//! Core graph types
//!
//! Nodes are dense indices `0..n`. An [`AdjacencyList`] stores, for every
//! node, its successors in the same order as the columns of the matrix it
//! was built from.

use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::CycleSearchError;

/// Successor lists for a directed graph over nodes `0..len()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    successors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Wrap raw successor rows. Every successor must be `< rows.len()`.
    pub(crate) fn from_rows(successors: Vec<Vec<usize>>) -> Self {
        Self { successors }
    }

    /// An adjacency list with `node_count` nodes and no edges
    pub fn empty(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Successors of `node` in column order
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors
            .get(from)
            .is_some_and(|succ| succ.contains(&to))
    }

    pub fn has_self_loop(&self, node: usize) -> bool {
        self.has_edge(node, node)
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Iterate over `(from, to)` pairs in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, succ)| succ.iter().map(move |&to| (from, to)))
    }

    /// The subgraph induced by nodes `>= floor`.
    ///
    /// Node indices are kept, so the result still has `len()` rows; rows
    /// below `floor` are empty and edges into them are dropped.
    pub fn induced_from(&self, floor: usize) -> Self {
        let successors = self
            .successors
            .iter()
            .enumerate()
            .map(|(node, succ)| {
                if node < floor {
                    Vec::new()
                } else {
                    succ.iter().copied().filter(|&w| w >= floor).collect()
                }
            })
            .collect();

        Self { successors }
    }

    /// The subgraph induced by `members`; every other row is emptied.
    pub fn restricted_to(&self, members: &BTreeSet<usize>) -> Self {
        let successors = self
            .successors
            .iter()
            .enumerate()
            .map(|(node, succ)| {
                if members.contains(&node) {
                    succ.iter()
                        .copied()
                        .filter(|w| members.contains(w))
                        .collect()
                } else {
                    Vec::new()
                }
            })
            .collect();

        Self { successors }
    }

    /// Convert back to a square boolean matrix
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.len();
        let mut matrix = vec![vec![false; n]; n];
        for (from, to) in self.edges() {
            matrix[from][to] = true;
        }
        matrix
    }

    /// Build a petgraph graph whose node weights are the given labels.
    ///
    /// Node `i` of this list becomes `NodeIndex::new(i)`. There must be
    /// exactly one label per node.
    pub fn to_digraph<N: Clone>(
        &self,
        labels: &[N],
    ) -> Result<DiGraph<N, ()>, CycleSearchError> {
        if labels.len() != self.len() {
            return Err(CycleSearchError::LabelCountMismatch {
                labels: labels.len(),
                nodes: self.len(),
            });
        }

        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        for label in labels {
            graph.add_node(label.clone());
        }
        for (from, to) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyList {
        // 0 -> 1 -> 2 -> 0, 2 -> 3, 3 -> 3
        AdjacencyList::from_rows(vec![vec![1], vec![2], vec![0, 3], vec![3]])
    }

    #[test]
    fn test_basic_accessors() {
        let list = sample();
        assert_eq!(list.len(), 4);
        assert_eq!(list.edge_count(), 5);
        assert_eq!(list.successors(2), &[0, 3]);
        assert!(list.has_edge(2, 3));
        assert!(!list.has_edge(3, 2));
        assert!(!list.has_edge(9, 0));
        assert!(list.has_self_loop(3));
        assert!(!list.has_self_loop(0));
    }

    #[test]
    fn test_induced_from_drops_lower_nodes() {
        let induced = sample().induced_from(1);
        assert_eq!(induced.len(), 4);
        assert!(induced.successors(0).is_empty());
        assert_eq!(induced.successors(1), &[2]);
        assert_eq!(induced.successors(2), &[3]);
        assert_eq!(induced.successors(3), &[3]);
    }

    #[test]
    fn test_restricted_to_members() {
        let members: BTreeSet<usize> = [0, 1, 2].into_iter().collect();
        let restricted = sample().restricted_to(&members);
        assert_eq!(restricted.successors(2), &[0]);
        assert!(restricted.successors(3).is_empty());
        assert_eq!(restricted.edge_count(), 3);
    }

    #[test]
    fn test_matrix_round_trip() {
        let list = sample();
        let matrix = list.to_matrix();
        assert!(matrix[2][3]);
        assert!(!matrix[3][2]);
        assert_eq!(matrix.len(), 4);
    }

    #[test]
    fn test_to_digraph_preserves_labels() {
        let graph = sample().to_digraph(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph[NodeIndex::new(2)], "c");
    }

    #[test]
    fn test_to_digraph_rejects_missing_labels() {
        let result = sample().to_digraph(&["a", "b"]);
        assert!(matches!(
            result,
            Err(CycleSearchError::LabelCountMismatch {
                labels: 2,
                nodes: 4
            })
        ));
    }
}
