use std::collections::BTreeSet;

use crate::graph::AdjacencyList;

/// The strongly connected component with the lowest node index in the
/// subgraph induced by `{floor, floor + 1, ..., n - 1}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    adj_list: AdjacencyList,
    lowest_node_id: usize,
    members: BTreeSet<usize>,
}

impl SccResult {
    fn new(adj_list: AdjacencyList, members: BTreeSet<usize>) -> Option<Self> {
        let lowest_node_id = *members.first()?;
        Some(Self {
            adj_list,
            lowest_node_id,
            members,
        })
    }

    /// Adjacency list containing only edges between members of the
    /// component. Rows of non-members are empty.
    pub fn adj_list(&self) -> &AdjacencyList {
        &self.adj_list
    }

    /// The smallest node index in the component
    pub fn lowest_node_id(&self) -> usize {
        self.lowest_node_id
    }

    /// Member node indices in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.members.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Finds strongly connected components of shrinking induced subgraphs with
/// Tarjan's algorithm.
///
/// Given a floor `s`, it looks at the subgraph containing nodes
/// `{s, s + 1, ..., n - 1}` and returns the component holding the lowest
/// node index of that subgraph. Components made of a single node without a
/// self-loop cannot hold a cycle and are never returned.
pub struct StrongConnectedComponents<'a> {
    adj_list_original: &'a AdjacencyList,
}

impl<'a> StrongConnectedComponents<'a> {
    pub fn new(adj_list: &'a AdjacencyList) -> Self {
        Self {
            adj_list_original: adj_list,
        }
    }

    /// The component with the least vertex in the subgraph induced by nodes
    /// `>= floor`, or `None` once no such component exists.
    pub fn find_lowest_scc(&self, floor: usize) -> Option<SccResult> {
        let n = self.adj_list_original.len();
        let mut floor = floor;

        while floor < n {
            let subgraph = self.adj_list_original.induced_from(floor);
            let components = TarjanSearch::new(&subgraph).run(floor);

            let lowest = components
                .into_iter()
                .fold(None::<BTreeSet<usize>>, |best, scc| match best {
                    Some(best) if best.first() <= scc.first() => Some(best),
                    _ => Some(scc),
                })?;

            if !lowest.contains(&floor) && !lowest.contains(&(floor + 1)) {
                // Nothing cycles through `floor`; slide the subgraph forward.
                log::trace!(
                    "lowest component at floor {floor} starts at {:?}, sliding",
                    lowest.first()
                );
                floor += 1;
                continue;
            }

            let adj_list = subgraph.restricted_to(&lowest);
            return SccResult::new(adj_list, lowest);
        }

        None
    }

    /// Iterate over the components the cycle search visits: starting at
    /// floor 0, each step yields the lowest component and moves the floor
    /// just past its lowest node.
    pub fn lowest_components(&self) -> LowestComponents<'_> {
        LowestComponents {
            finder: self,
            floor: 0,
        }
    }
}

/// Iterator returned by [`StrongConnectedComponents::lowest_components`]
pub struct LowestComponents<'f> {
    finder: &'f StrongConnectedComponents<'f>,
    floor: usize,
}

impl Iterator for LowestComponents<'_> {
    type Item = SccResult;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.finder.find_lowest_scc(self.floor)?;
        self.floor = result.lowest_node_id() + 1;
        Some(result)
    }
}

/// Tarjan bookkeeping for a single pass over one induced subgraph
struct TarjanSearch<'g> {
    adj_list: &'g AdjacencyList,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    number: Vec<usize>,
    lowlink: Vec<usize>,
    stack: Vec<usize>,
    counter: usize,
    components: Vec<BTreeSet<usize>>,
}

impl<'g> TarjanSearch<'g> {
    fn new(adj_list: &'g AdjacencyList) -> Self {
        let n = adj_list.len();
        Self {
            adj_list,
            visited: vec![false; n],
            on_stack: vec![false; n],
            number: vec![0; n],
            lowlink: vec![0; n],
            stack: Vec::new(),
            counter: 0,
            components: Vec::new(),
        }
    }

    /// Visit every node `>= floor` in ascending order and collect the
    /// non-trivial components.
    fn run(mut self, floor: usize) -> Vec<BTreeSet<usize>> {
        for node in floor..self.adj_list.len() {
            if !self.visited[node] {
                self.strong_connect(node);
            }
        }
        self.components
    }

    fn strong_connect(&mut self, root: usize) {
        self.counter += 1;
        self.number[root] = self.counter;
        self.lowlink[root] = self.counter;
        self.visited[root] = true;
        self.stack.push(root);
        self.on_stack[root] = true;

        let adj_list = self.adj_list;
        for &w in adj_list.successors(root) {
            if !self.visited[w] {
                self.strong_connect(w);
                self.lowlink[root] = self.lowlink[root].min(self.lowlink[w]);
            } else if self.number[w] < self.number[root] && self.on_stack[w] {
                self.lowlink[root] = self.lowlink[root].min(self.number[w]);
            }
        }

        if self.lowlink[root] != self.number[root] {
            return;
        }

        let mut scc = BTreeSet::new();
        while let Some(next) = self.stack.pop() {
            self.on_stack[next] = false;
            scc.insert(next);
            if next == root {
                break;
            }
        }

        if scc.len() > 1 || adj_list.has_self_loop(root) {
            self.components.push(scc);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn list(node_count: usize, edges: &[(usize, usize)]) -> AdjacencyList {
        AdjacencyList::from_edges(node_count, edges.iter().copied()).unwrap()
    }

    fn members(result: &SccResult) -> Vec<usize> {
        result.node_ids().collect()
    }

    #[test]
    fn test_single_component_from_floor_zero() {
        let adj = list(3, &[(0, 1), (1, 2), (2, 0)]);
        let finder = StrongConnectedComponents::new(&adj);

        let result = finder.find_lowest_scc(0).unwrap();
        assert_eq!(result.lowest_node_id(), 0);
        assert_eq!(members(&result), vec![0, 1, 2]);
        assert_eq!(result.adj_list().edge_count(), 3);
    }

    #[test]
    fn test_acyclic_graph_has_no_component() {
        let adj = list(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let finder = StrongConnectedComponents::new(&adj);

        assert!(finder.find_lowest_scc(0).is_none());
        assert_eq!(finder.lowest_components().count(), 0);
    }

    #[test]
    fn test_floor_past_end_returns_none() {
        let adj = list(2, &[(0, 1), (1, 0)]);
        let finder = StrongConnectedComponents::new(&adj);

        assert!(finder.find_lowest_scc(2).is_none());
        assert!(finder.find_lowest_scc(10).is_none());
    }

    #[test]
    fn test_floor_slides_to_first_cycle() {
        // 0 -> 1 -> 2 are acyclic, the cycle lives on 4 <-> 5
        let adj = list(6, &[(0, 1), (1, 2), (2, 4), (4, 5), (5, 4)]);
        let finder = StrongConnectedComponents::new(&adj);

        let result = finder.find_lowest_scc(0).unwrap();
        assert_eq!(result.lowest_node_id(), 4);
        assert_eq!(members(&result), vec![4, 5]);
    }

    #[test]
    fn test_edges_below_floor_are_ignored() {
        // The only cycle through 1 needs node 0
        let adj = list(3, &[(0, 1), (1, 0), (1, 2)]);
        let finder = StrongConnectedComponents::new(&adj);

        assert_eq!(finder.find_lowest_scc(0).unwrap().lowest_node_id(), 0);
        assert!(finder.find_lowest_scc(1).is_none());
    }

    #[test]
    fn test_edges_leaving_component_are_removed() {
        let adj = list(4, &[(0, 1), (1, 0), (1, 2), (2, 3)]);
        let finder = StrongConnectedComponents::new(&adj);

        let result = finder.find_lowest_scc(0).unwrap();
        assert_eq!(result.adj_list().successors(1), &[0]);
        assert!(result.adj_list().successors(2).is_empty());
    }

    #[test]
    fn test_self_loop_is_a_component() {
        let adj = list(3, &[(0, 1), (2, 2)]);
        let finder = StrongConnectedComponents::new(&adj);

        let result = finder.find_lowest_scc(0).unwrap();
        assert_eq!(result.lowest_node_id(), 2);
        assert_eq!(result.len(), 1);
        assert_eq!(result.adj_list().successors(2), &[2]);
    }

    #[test]
    fn test_lowest_components_advance_floor() {
        // Scenario with overlapping cycles through 1 and 6
        let adj = list(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 0),
                (2, 6),
                (3, 4),
                (4, 5),
                (4, 6),
                (5, 3),
                (6, 7),
                (7, 8),
                (8, 6),
                (6, 1),
            ],
        );
        let finder = StrongConnectedComponents::new(&adj);

        let roots: Vec<(usize, Vec<usize>)> = finder
            .lowest_components()
            .map(|scc| (scc.lowest_node_id(), members(&scc)))
            .collect();

        assert_eq!(
            roots,
            vec![
                (0, vec![0, 1, 2, 6, 7, 8]),
                (1, vec![1, 2, 6, 7, 8]),
                (3, vec![3, 4, 5]),
                (6, vec![6, 7, 8]),
            ]
        );
    }

    #[test]
    fn test_matches_petgraph_tarjan_at_floor_zero() {
        use petgraph::algo::tarjan_scc;

        let adj = list(
            7,
            &[(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (5, 6), (1, 2)],
        );
        let graph = adj.to_digraph(&(0..7).collect::<Vec<_>>()).unwrap();
        let mut expected: Vec<Vec<usize>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut ids: Vec<usize> = scc.into_iter().map(|idx| idx.index()).collect();
                ids.sort();
                ids
            })
            .collect();
        expected.sort();

        let finder = StrongConnectedComponents::new(&adj);
        let lowest = finder.find_lowest_scc(0).unwrap();
        assert_eq!(members(&lowest), expected[0]);
    }
}
