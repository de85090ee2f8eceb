use std::collections::{BTreeMap, HashSet};
use std::io::Write;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::detector::Cycle;
use crate::error::CycleSearchError;
use crate::graph::AdjacencyList;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
    pub const LEGEND_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleSearchError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleSearchError::from)
    };
}

/// Which nodes and edges lie on at least one cycle
struct CycleMembership {
    nodes: HashSet<usize>,
    edges: HashSet<(usize, usize)>,
}

impl CycleMembership {
    fn new(cycles: &[Cycle<usize>]) -> Self {
        let mut nodes = HashSet::new();
        let mut edges = HashSet::new();

        for cycle in cycles {
            let path = cycle.nodes();
            nodes.extend(path.iter().copied());
            for (i, &from) in path.iter().enumerate() {
                let to = path[(i + 1) % path.len()];
                edges.insert((from, to));
            }
        }

        Self { nodes, edges }
    }

    fn has_node(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node.index())
    }

    fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.edges.contains(&(from.index(), to.index()))
    }
}

/// Renders a labelled graph, optionally highlighting the edges of the
/// given cycles (expressed as node indices).
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        adj_list: &AdjacencyList,
        labels: &[String],
        cycles: &[Cycle<usize>],
        output: &mut dyn Write,
    ) -> Result<(), CycleSearchError> {
        let graph = adj_list.to_digraph(labels)?;
        if graph.node_count() == 0 {
            writeln_out!(output, "No nodes found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Directed Graph\n")?;

        let membership = CycleMembership::new(cycles);

        for node in graph.node_indices() {
            let name = &graph[node];

            if membership.has_node(node) && self.highlight_cycles {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", name)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", name)?;
            }

            let targets: Vec<NodeIndex> = adj_list
                .successors(node.index())
                .iter()
                .map(|&w| NodeIndex::new(w))
                .collect();

            if targets.is_empty() {
                writeln_out!(output, "  └── (no outgoing edges)")?;
            }

            for (i, &target) in targets.iter().enumerate() {
                let prefix = if i == targets.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let cycle_marker = if membership.has_edge(node, target) && self.highlight_cycles {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} → {}{}", prefix, graph[target], cycle_marker)?;
            }

            writeln_out!(output)?;
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of an elementary cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        adj_list: &AdjacencyList,
        labels: &[String],
        cycles: &[Cycle<usize>],
        output: &mut dyn Write,
    ) -> Result<(), CycleSearchError> {
        let graph = adj_list.to_digraph(labels)?;
        let membership = CycleMembership::new(cycles);

        writeln_out!(output, "graph TD")?;

        for node in graph.node_indices() {
            let node_id = Self::node_id(node);
            let label = Self::escape(&graph[node]);

            if membership.has_node(node) && self.highlight_cycles {
                writeln_out!(output, "    {}((\"{}\"))", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (link_style_index, edge) in graph.edge_references().enumerate() {
            let (source, target) = (edge.source(), edge.target());
            writeln_out!(
                output,
                "    {} --> {}",
                Self::node_id(source),
                Self::node_id(target)
            )?;

            let (color, width) = if membership.has_edge(source, target) && self.highlight_cycles {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_style_index,
                color,
                width
            )?;
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph Cycles[\"Elementary Cycles\"]")?;
            for (i, cycle) in cycles.iter().enumerate() {
                let path: Vec<String> = cycle
                    .nodes()
                    .iter()
                    .map(|&idx| Self::escape(&graph[NodeIndex::new(idx)]))
                    .collect();
                writeln_out!(
                    output,
                    "        C{}[\"Cycle {}: {}\"]",
                    i + 1,
                    i + 1,
                    path.join(" → ")
                )?;
            }
            writeln_out!(
                output,
                "        style Cycles fill:{},stroke:#ddd,stroke-width:1px",
                colors::LEGEND_BG
            )?;
            writeln_out!(output, "    end")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        adj_list: &AdjacencyList,
        labels: &[String],
        cycles: &[Cycle<usize>],
        output: &mut dyn Write,
    ) -> Result<(), CycleSearchError> {
        let graph: DiGraph<String, ()> = adj_list.to_digraph(labels)?;
        let membership = CycleMembership::new(cycles);

        writeln_out!(output, "digraph cycles {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in graph.node_indices() {
            let (fill_color, stroke_color) = if membership.has_node(node) && self.highlight_cycles
            {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    {} [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                Self::node_id(node),
                Self::escape(&graph[node]),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        // Count how many cycles use each edge so heavily shared edges stand out
        let mut edge_usage: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for cycle in cycles {
            let path = cycle.nodes();
            for (i, &from) in path.iter().enumerate() {
                *edge_usage
                    .entry((from, path[(i + 1) % path.len()]))
                    .or_default() += 1;
            }
        }

        for edge in graph.edge_references() {
            let (source, target) = (edge.source(), edge.target());
            let usage = edge_usage
                .get(&(source.index(), target.index()))
                .copied()
                .unwrap_or(0);

            if usage > 0 && self.highlight_cycles {
                writeln_out!(
                    output,
                    r#"    {} -> {} [label="{} {}", color="{}", penwidth=3];"#,
                    Self::node_id(source),
                    Self::node_id(target),
                    usage,
                    if usage == 1 { "cycle" } else { "cycles" },
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    {} -> {} [color="{}", penwidth=2];"#,
                    Self::node_id(source),
                    Self::node_id(target),
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn node_id(node: NodeIndex) -> String {
        format!("n{}", node.index())
    }

    fn escape(label: &str) -> String {
        label.replace('"', "'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::CycleDetector;

    fn triangle() -> (AdjacencyList, Vec<String>, Vec<Cycle<usize>>) {
        let adj = AdjacencyList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let mut detector = CycleDetector::new();
        detector.detect_cycles_in(&adj, &[0, 1, 2, 3]).unwrap();
        (adj, labels, detector.into_cycles())
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CycleSearchError>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_cycle_membership_wraps_around() {
        let (_, _, cycles) = triangle();
        let membership = CycleMembership::new(&cycles);
        assert!(membership.has_edge(NodeIndex::new(2), NodeIndex::new(0)));
        assert!(!membership.has_edge(NodeIndex::new(2), NodeIndex::new(3)));
        assert!(!membership.has_node(NodeIndex::new(3)));
    }

    #[test]
    fn test_ascii_marks_cycle_edges() {
        let (adj, labels, cycles) = triangle();
        let output = render(|out| GraphRenderer::new(true).render_ascii(&adj, &labels, &cycles, out));

        assert!(output.contains("a ⚠️  IN CYCLE"));
        assert!(output.contains("→ a ⚠️  [CYCLE]"));
        assert!(output.contains("  └── → d\n"));
        assert!(output.contains("(no outgoing edges)"));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let output = render(|out| {
            GraphRenderer::new(true).render_ascii(&AdjacencyList::empty(0), &[], &[], out)
        });
        assert_eq!(output, "No nodes found to visualize\n");
    }

    #[test]
    fn test_mermaid_lists_cycles() {
        let (adj, labels, cycles) = triangle();
        let output =
            render(|out| GraphRenderer::new(true).render_mermaid(&adj, &labels, &cycles, out));

        assert!(output.starts_with("graph TD"));
        assert!(output.contains("n0((\"a\"))"));
        assert!(output.contains("n3[\"d\"]"));
        assert!(output.contains("Cycle 1: a → b → c"));
        assert!(output.contains(colors::CYCLE_EDGE));
    }

    #[test]
    fn test_dot_without_highlighting() {
        let (adj, labels, cycles) = triangle();
        let output = render(|out| GraphRenderer::new(false).render_dot(&adj, &labels, &cycles, out));

        assert!(output.contains("digraph cycles {"));
        assert!(output.contains("n2 -> n3"));
        assert!(!output.contains(colors::CYCLE_EDGE));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_counts_cycle_usage() {
        let adj = AdjacencyList::from_edges(3, [(0, 1), (1, 0), (1, 2), (2, 0)]).unwrap();
        let labels: Vec<String> = (0..3).map(|i| i.to_string()).collect();
        let mut detector = CycleDetector::new();
        detector.detect_cycles_in(&adj, &[0, 1, 2]).unwrap();

        let output = render(|out| {
            GraphRenderer::new(true).render_dot(&adj, &labels, detector.cycles(), out)
        });

        // 0 -> 1 lies on both [0, 1] and [0, 1, 2]
        assert!(output.contains(r#"n0 -> n1 [label="2 cycles""#));
        assert!(output.contains(r#"n1 -> n2 [label="1 cycle""#));
    }

    #[test]
    fn test_short_label_list_is_an_error() {
        let (adj, _, cycles) = triangle();
        let labels = vec!["a".to_string()];
        let renderer = GraphRenderer::new(true);

        for result in [
            renderer.render_ascii(&adj, &labels, &cycles, &mut Vec::<u8>::new()),
            renderer.render_mermaid(&adj, &labels, &cycles, &mut Vec::<u8>::new()),
            renderer.render_dot(&adj, &labels, &cycles, &mut Vec::<u8>::new()),
        ] {
            assert!(matches!(
                result,
                Err(CycleSearchError::LabelCountMismatch {
                    labels: 1,
                    nodes: 4
                })
            ));
        }
    }
}
