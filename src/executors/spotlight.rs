//! Spotlight command executor

use console::style;
use miette::Result;

use crate::config::SpotlightConfig;
use crate::core::GraphDefinition;
use crate::error::CycleSearchError;
use crate::executors::{
    CommandExecutor, generate_report, load_inputs, report_no_graphs, search_graphs,
};
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Searching for cycles through '{}'...\n",
            style("🔦").cyan(),
            style(&config.node).bold()
        );

        let mut progress = ProgressReporter::for_terminal();

        let graphs = load_inputs(&config.paths, &mut progress)?;
        if graphs.is_empty() {
            report_no_graphs();
            return Ok(());
        }

        let graphs = graphs_containing(graphs, &config.node)?;
        let mut results = search_graphs(&graphs, &mut progress)?;
        for graph in &mut results {
            graph.cycles.retain(|cycle| cycle.contains(&config.node));
        }

        let relevant: usize = results.iter().map(|g| g.cycle_count()).sum();
        if relevant == 0 {
            eprintln!(
                "{} No cycles found through '{}'",
                style("✓").green(),
                style(&config.node).bold()
            );
        } else {
            eprintln!(
                "\n{} Found {} {} through '{}':",
                style("⚠").yellow(),
                relevant,
                pluralize("cycle", relevant),
                style(&config.node).bold()
            );
        }

        let report = generate_report(config.format, config.max_cycles, &results)?;
        print!("{report}");

        Ok(())
    }
}

/// Keep the graphs with a node labelled `node`, failing if there are none
fn graphs_containing(
    graphs: Vec<GraphDefinition>,
    node: &str,
) -> Result<Vec<GraphDefinition>, CycleSearchError> {
    let matching: Vec<_> = graphs
        .into_iter()
        .filter(|graph| graph.node_index(node).is_some())
        .collect();

    if matching.is_empty() {
        return Err(CycleSearchError::NodeNotFound {
            label: node.to_string(),
        });
    }

    Ok(matching)
}
