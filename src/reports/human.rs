//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{GraphCycles, total_cycles};
use crate::error::CycleSearchError;
use crate::utils::string::{format_cycle_path, pluralize};

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    /// `max_cycles` limits how many cycles are listed per graph
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CycleSearchError> {
        let mut output = String::new();
        let total = total_cycles(results);

        if total == 0 {
            write!(
                output,
                "\n{} No cycles detected in {} {}.\n",
                style("✅").green().bold(),
                results.len(),
                pluralize("graph", results.len())
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} elementary {}:\n\n",
            style("❌").red().bold(),
            style(total).red().bold(),
            pluralize("cycle", total)
        )?;

        let mut truncated = false;

        for graph in results {
            writeln!(
                output,
                "{} {} ({} {}, {} {})",
                style("📦").blue(),
                style(&graph.name).bold(),
                graph.node_count,
                pluralize("node", graph.node_count),
                graph.edge_count,
                pluralize("edge", graph.edge_count)
            )?;

            if !graph.has_cycles() {
                writeln!(output, "  {} acyclic\n", style("✓").green())?;
                continue;
            }

            let limit = self.max_cycles.unwrap_or(usize::MAX);
            for (i, cycle) in graph.cycles.iter().take(limit).enumerate() {
                writeln!(
                    output,
                    "  {} Cycle #{} {}",
                    style("🔄").yellow(),
                    i + 1,
                    style(format_cycle_path(cycle.nodes())).yellow()
                )?;
            }

            if graph.cycle_count() > limit {
                truncated = true;
                writeln!(
                    output,
                    "  {} ... {} more",
                    style("…").dim(),
                    graph.cycle_count() - limit
                )?;
            }
            writeln!(output)?;
        }

        if truncated && let Some(limit) = self.max_cycles {
            writeln!(
                output,
                "{} Showing at most {} {} per graph. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                pluralize("cycle", limit)
            )?;
        }

        Ok(output)
    }
}
