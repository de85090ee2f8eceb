use std::fmt;

use crate::error::CycleSearchError;
use crate::graph::{AdjacencyList, build_adjacency_list};
use crate::scc::{SccResult, StrongConnectedComponents};

/// One elementary cycle, as the payloads of its nodes.
///
/// The first node is the lowest-indexed member of the cycle; the closing
/// edge back to it is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle<N> {
    nodes: Vec<N>,
}

impl<N> Cycle<N> {
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: PartialEq> Cycle<N> {
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }
}

impl<N: fmt::Display> fmt::Display for Cycle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Enumerates all elementary cycles of a directed graph.
///
/// Uses Johnson's algorithm: the graph is walked component by component
/// (see [`StrongConnectedComponents::lowest_components`]) and a blocking
/// depth-first search rooted at each component's least node reports every
/// cycle through that node.
pub struct CycleDetector<N = usize> {
    cycles: Vec<Cycle<N>>,
}

impl<N> Default for CycleDetector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> CycleDetector<N> {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Get all detected cycles, in discovery order
    pub fn cycles(&self) -> &[Cycle<N>] {
        &self.cycles
    }

    pub fn into_cycles(self) -> Vec<Cycle<N>> {
        self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}

impl<N: PartialEq> CycleDetector<N> {
    /// Cycles passing through the node carrying `node`
    pub fn cycles_through<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a Cycle<N>> + 'a {
        self.cycles.iter().filter(move |cycle| cycle.contains(node))
    }
}

impl<N: Clone> CycleDetector<N> {
    /// Detect all elementary cycles of the graph given by an adjacency
    /// matrix, labelling each node `i` with `labels[i]`.
    ///
    /// Results of a previous call are discarded.
    pub fn detect_cycles(
        &mut self,
        matrix: &[Vec<bool>],
        labels: &[N],
    ) -> Result<(), CycleSearchError> {
        let adj_list = build_adjacency_list(matrix)?;
        self.detect_cycles_in(&adj_list, labels)
    }

    /// Same as [`detect_cycles`](Self::detect_cycles) for an already built
    /// adjacency list.
    pub fn detect_cycles_in(
        &mut self,
        adj_list: &AdjacencyList,
        labels: &[N],
    ) -> Result<(), CycleSearchError> {
        self.detect_cycles_with_observer(adj_list, labels, |_| {})
    }

    /// Detect cycles, calling `on_component` with every strongly connected
    /// component before it is searched.
    pub fn detect_cycles_with_observer<F>(
        &mut self,
        adj_list: &AdjacencyList,
        labels: &[N],
        mut on_component: F,
    ) -> Result<(), CycleSearchError>
    where
        F: FnMut(&SccResult),
    {
        if labels.len() != adj_list.len() {
            return Err(CycleSearchError::LabelCountMismatch {
                labels: labels.len(),
                nodes: adj_list.len(),
            });
        }

        self.cycles.clear();

        let finder = StrongConnectedComponents::new(adj_list);
        let mut search = JohnsonSearch::new(adj_list.len());

        for scc in finder.lowest_components() {
            on_component(&scc);

            let root = scc.lowest_node_id();
            log::debug!("searching component rooted at {root} ({} nodes)", scc.len());

            search.reset(scc.node_ids());
            let before = search.found.len();
            search.find_cycles(root, root, scc.adj_list());

            log::debug!(
                "component rooted at {root} produced {} cycles",
                search.found.len() - before
            );
        }

        self.cycles = search
            .found
            .into_iter()
            .map(|path| Cycle {
                nodes: path.into_iter().map(|idx| labels[idx].clone()).collect(),
            })
            .collect();

        Ok(())
    }
}

/// Blocking state of Johnson's search, alive for one `detect_*` call
struct JohnsonSearch {
    blocked: Vec<bool>,
    /// `b_lists[w]` holds the nodes to unblock once `w` unblocks
    b_lists: Vec<Vec<usize>>,
    path: Vec<usize>,
    found: Vec<Vec<usize>>,
}

impl JohnsonSearch {
    fn new(node_count: usize) -> Self {
        Self {
            blocked: vec![false; node_count],
            b_lists: vec![Vec::new(); node_count],
            path: Vec::new(),
            found: Vec::new(),
        }
    }

    /// Clear blocking state for the members of the next component. Nodes
    /// outside it keep stale state but are never reached from its root.
    fn reset(&mut self, members: impl Iterator<Item = usize>) {
        for node in members {
            self.blocked[node] = false;
            self.b_lists[node].clear();
        }
    }

    /// Search for cycles through `root` that continue from `v`. Returns
    /// whether at least one was found.
    fn find_cycles(&mut self, v: usize, root: usize, adj_list: &AdjacencyList) -> bool {
        let mut found = false;
        self.path.push(v);
        self.blocked[v] = true;

        for &w in adj_list.successors(v) {
            if w == root {
                self.found.push(self.path.clone());
                found = true;
            } else if !self.blocked[w] && self.find_cycles(w, root, adj_list) {
                found = true;
            }
        }

        if found {
            self.unblock(v);
        } else {
            for &w in adj_list.successors(v) {
                if !self.b_lists[w].contains(&v) {
                    self.b_lists[w].push(v);
                }
            }
        }

        self.path.pop();
        found
    }

    fn unblock(&mut self, node: usize) {
        self.blocked[node] = false;
        for w in std::mem::take(&mut self.b_lists[node]) {
            if self.blocked[w] {
                self.unblock(w);
            }
        }
    }
}

/// All elementary cycles of `matrix`, as node indices in discovery order
pub fn elementary_cycles(matrix: &[Vec<bool>]) -> Result<Vec<Vec<usize>>, CycleSearchError> {
    let labels: Vec<usize> = (0..matrix.len()).collect();
    elementary_cycles_labeled(matrix, &labels)
}

/// All elementary cycles of `matrix`, with node `i` reported as `labels[i]`
pub fn elementary_cycles_labeled<N: Clone>(
    matrix: &[Vec<bool>],
    labels: &[N],
) -> Result<Vec<Vec<N>>, CycleSearchError> {
    let mut detector = CycleDetector::new();
    detector.detect_cycles(matrix, labels)?;
    Ok(detector
        .into_cycles()
        .into_iter()
        .map(Cycle::into_nodes)
        .collect())
}
