use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "johnson-cycles",
    about = "↻ Enumerate every elementary cycle of directed graphs",
    long_about = "johnson-cycles reads directed graphs from JSON or TOML files and lists all of \
                  their elementary cycles using Johnson's algorithm, searching one strongly \
                  connected component at a time.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find all elementary cycles in every graph file
    #[command(
        long_about = "Load every graph file found under the given paths and enumerate all of its \
                      elementary cycles. Each cycle starts at its lowest-indexed node and is \
                      reported in the order Johnson's algorithm discovers it. Files are loaded \
                      and searched in parallel."
    )]
    Search {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "JOHNSON_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Show only the cycles passing through one node
    #[command(
        long_about = "Enumerate cycles as `search` does, keeping only those that visit the node \
                      with the given label. Graphs without such a node are skipped; it is an \
                      error if no graph contains it."
    )]
    Spotlight {
        /// Label of the node to focus on
        #[arg(value_name = "NODE", env = "JOHNSON_CYCLES_NODE")]
        node: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// List the strongly connected components searched for cycles
    #[command(
        long_about = "Print the sequence of lowest strongly connected components the cycle search \
                      visits: for each, its least node, its members and the edges between them."
    )]
    Components {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Draw a graph with its cycles highlighted
    #[command(
        long_about = "Render graphs as ASCII art, Mermaid diagrams or Graphviz DOT files. Nodes \
                      and edges that belong to an elementary cycle are highlighted."
    )]
    Render {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "JOHNSON_CYCLES_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "JOHNSON_CYCLES_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            env = "JOHNSON_CYCLES_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "johnson-cycles",
            "search",
            "graphs",
            "--format",
            "json",
            "--max-cycles",
            "3",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => {
                assert_eq!(common.paths, vec![PathBuf::from("graphs")]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(3));
                assert!(error_on_cycles);
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["johnson-cycles", "render", "g.json"]).unwrap();

        match cli.command {
            Commands::Render {
                format,
                output,
                highlight_cycles,
                ..
            } => {
                assert_eq!(format, GraphFormat::Ascii);
                assert!(output.is_none());
                assert!(highlight_cycles);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_spotlight_requires_node() {
        assert!(Cli::try_parse_from(["johnson-cycles", "spotlight"]).is_err());
    }
}
