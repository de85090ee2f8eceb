//! Components command executor

use std::fmt::Write;

use console::style;
use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::ComponentsConfig;
use crate::core::GraphDefinition;
use crate::error::CycleSearchError;
use crate::executors::{CommandExecutor, load_inputs, report_no_graphs};
use crate::progress::ProgressReporter;
use crate::scc::{SccResult, StrongConnectedComponents};
use crate::utils::string::pluralize;

pub struct ComponentsExecutor;

impl CommandExecutor for ComponentsExecutor {
    type Config = ComponentsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Listing strongly connected components...\n",
            style("🧩").cyan()
        );

        let mut progress = ProgressReporter::for_terminal();

        let graphs = load_inputs(&config.paths, &mut progress)?;
        if graphs.is_empty() {
            report_no_graphs();
            return Ok(());
        }

        let listings: Vec<_> = graphs.iter().map(ComponentListing::new).collect();
        let report = match config.format {
            OutputFormat::Json => generate_json(&listings),
            _ => generate_human(&listings),
        };

        print!("{}", report.wrap_err("Failed to generate component report")?);
        Ok(())
    }
}

/// The lowest components of one graph, in search order
struct ComponentListing<'g> {
    graph: &'g GraphDefinition,
    components: Vec<SccResult>,
}

impl<'g> ComponentListing<'g> {
    fn new(graph: &'g GraphDefinition) -> Self {
        let components = StrongConnectedComponents::new(&graph.adj_list)
            .lowest_components()
            .collect();
        Self { graph, components }
    }

    fn label(&self, node: usize) -> &str {
        &self.graph.labels[node]
    }

    fn members(&self, scc: &SccResult) -> Vec<&str> {
        scc.node_ids().map(|node| self.label(node)).collect()
    }

    fn edges(&self, scc: &SccResult) -> Vec<(&str, &str)> {
        scc.adj_list()
            .edges()
            .map(|(from, to)| (self.label(from), self.label(to)))
            .collect()
    }
}

fn generate_human(listings: &[ComponentListing<'_>]) -> Result<String, CycleSearchError> {
    let mut output = String::new();

    for listing in listings {
        let count = listing.components.len();
        writeln!(
            output,
            "{} {} ({} {})",
            style("📦").blue(),
            style(&listing.graph.name).bold(),
            count,
            pluralize("component", count)
        )?;

        for scc in &listing.components {
            writeln!(
                output,
                "  {} root {}: {}",
                style("•").dim(),
                style(listing.label(scc.lowest_node_id())).yellow(),
                listing.members(scc).join(", ")
            )?;
            for (from, to) in listing.edges(scc) {
                writeln!(output, "      {} → {}", from, to)?;
            }
        }
        writeln!(output)?;
    }

    Ok(output)
}

fn generate_json(listings: &[ComponentListing<'_>]) -> Result<String, CycleSearchError> {
    let graphs: Vec<_> = listings
        .iter()
        .map(|listing| {
            let components: Vec<_> = listing
                .components
                .iter()
                .map(|scc| {
                    json!({
                        "root": listing.label(scc.lowest_node_id()),
                        "members": listing.members(scc),
                        "edges": listing.edges(scc),
                    })
                })
                .collect();
            json!({
                "name": listing.graph.name,
                "components": components,
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({ "graphs": graphs })).map_err(CycleSearchError::Json)
}
