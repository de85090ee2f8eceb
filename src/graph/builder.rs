//! Adjacency list construction from matrices and edge lists

use std::collections::BTreeSet;

use crate::error::CycleSearchError;
use crate::graph::AdjacencyList;

/// Calculate the adjacency list of a square boolean adjacency matrix.
///
/// `matrix[i][j] == true` means an edge `i -> j`. Successors of each node
/// appear in column order. An empty matrix yields an empty list.
///
/// # Errors
///
/// Returns [`CycleSearchError::NonSquareMatrix`] when any row does not have
/// exactly `matrix.len()` entries.
pub fn build_adjacency_list(matrix: &[Vec<bool>]) -> Result<AdjacencyList, CycleSearchError> {
    let n = matrix.len();

    if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(CycleSearchError::NonSquareMatrix {
            row,
            len: cells.len(),
            expected: n,
        });
    }

    let successors = matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(j, &edge)| edge.then_some(j))
                .collect()
        })
        .collect();

    Ok(AdjacencyList::from_rows(successors))
}

impl AdjacencyList {
    /// Build an adjacency list from `(from, to)` index pairs.
    ///
    /// Duplicate edges collapse into one, and successors are sorted so the
    /// result matches what [`build_adjacency_list`] returns for the
    /// equivalent matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CycleSearchError::EdgeOutOfRange`] if an endpoint is not a
    /// valid node index.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, CycleSearchError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut rows = vec![BTreeSet::new(); node_count];

        for (from, to) in edges {
            if from >= node_count || to >= node_count {
                return Err(CycleSearchError::EdgeOutOfRange {
                    from,
                    to,
                    node_count,
                });
            }
            rows[from].insert(to);
        }

        Ok(AdjacencyList::from_rows(
            rows.into_iter().map(|row| row.into_iter().collect()).collect(),
        ))
    }
}
