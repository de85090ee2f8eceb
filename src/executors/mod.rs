//! Command executors that handle the actual logic for each command

pub mod components;
pub mod render;
pub mod search;
pub mod spotlight;

use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::cli::OutputFormat;
use crate::core::{GraphCycles, GraphDefinition};
use crate::detector::CycleDetector;
use crate::error::CycleSearchError;
use crate::input_discovery::{InputDiscovery, load_graphs};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover graph files under `paths` and load them all
pub(crate) fn load_inputs(
    paths: &[PathBuf],
    progress: &mut Option<ProgressReporter>,
) -> Result<Vec<GraphDefinition>> {
    if let Some(p) = progress.as_mut() {
        p.start_discovery();
    }

    let files = InputDiscovery::new()
        .discover_all(paths)
        .wrap_err("Failed to discover graph files")?;
    let graphs = load_graphs(&files, progress.as_ref())?;

    if let Some(p) = progress.as_mut() {
        p.finish_discovery(graphs.len());
    }

    for graph in &graphs {
        log::info!(
            "loaded graph '{}' from {} ({} nodes, {} edges)",
            graph.name,
            graph.path.display(),
            graph.node_count(),
            graph.edge_count()
        );
    }

    Ok(graphs)
}

/// Enumerate the cycles of every graph in parallel.
///
/// Each graph gets its own detector, so searches share no state.
pub(crate) fn search_graphs(
    graphs: &[GraphDefinition],
    progress: &mut Option<ProgressReporter>,
) -> Result<Vec<GraphCycles>> {
    if let Some(p) = progress.as_mut() {
        p.start_search(graphs.len());
    }

    let shared = progress.as_ref();
    let results = graphs
        .par_iter()
        .map(|graph| -> Result<GraphCycles, CycleSearchError> {
            let mut components = 0;
            let mut detector = CycleDetector::new();
            detector.detect_cycles_with_observer(&graph.adj_list, &graph.labels, |_| {
                components += 1;
            })?;

            log::info!(
                "graph '{}': {} cycles in {} components",
                graph.name,
                detector.cycle_count(),
                components
            );
            if let Some(p) = shared {
                p.graph_searched(&graph.name, components);
            }

            Ok(GraphCycles {
                name: graph.name.clone(),
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
                cycles: detector.into_cycles(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("Failed to enumerate cycles")?;

    if let Some(p) = progress.as_mut() {
        p.finish_search(crate::core::total_cycles(&results));
    }

    Ok(results)
}

/// Render the cycle report in the requested format
pub(crate) fn generate_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    results: &[GraphCycles],
) -> Result<String> {
    let report = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(results),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(results),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(results),
    };

    report.wrap_err("Failed to generate report")
}

pub(crate) fn report_no_graphs() {
    eprintln!("{} No graph files found to analyze", style("ℹ").blue());
}
