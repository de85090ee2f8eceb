//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::core::GraphDefinition;
use crate::detector::{Cycle, CycleDetector};
use crate::error::CycleSearchError;
use crate::executors::{CommandExecutor, load_inputs, report_no_graphs};
use crate::graph::GraphRenderer;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let graphs = load_inputs(&config.paths, &mut None)?;
        if graphs.is_empty() {
            report_no_graphs();
            return Ok(());
        }

        let renderer = GraphRenderer::new(config.highlight_cycles);

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        for graph in &graphs {
            render_graph(
                &renderer,
                config.format,
                config.highlight_cycles,
                graph,
                output_writer.as_mut(),
            )
            .wrap_err_with(|| format!("Failed to render graph '{}'", graph.name))?;
        }
        output_writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

/// Cycles by node index, used to highlight nodes and edges
fn index_cycles(graph: &GraphDefinition) -> Result<Vec<Cycle<usize>>, CycleSearchError> {
    let indices: Vec<usize> = (0..graph.node_count()).collect();
    let mut detector = CycleDetector::new();
    detector.detect_cycles_in(&graph.adj_list, &indices)?;
    Ok(detector.into_cycles())
}

fn render_graph(
    renderer: &GraphRenderer,
    format: GraphFormat,
    highlight_cycles: bool,
    graph: &GraphDefinition,
    output: &mut dyn Write,
) -> Result<(), CycleSearchError> {
    let cycles = if highlight_cycles {
        index_cycles(graph)?
    } else {
        Vec::new()
    };

    match format {
        GraphFormat::Ascii => renderer.render_ascii(&graph.adj_list, &graph.labels, &cycles, output),
        GraphFormat::Mermaid => {
            renderer.render_mermaid(&graph.adj_list, &graph.labels, &cycles, output)
        }
        GraphFormat::Dot => renderer.render_dot(&graph.adj_list, &graph.labels, &cycles, output),
    }
}
