//! Search command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::config::SearchConfig;
use crate::core::total_cycles;
use crate::executors::{
    CommandExecutor, generate_report, load_inputs, report_no_graphs, search_graphs,
};
use crate::progress::ProgressReporter;

pub struct SearchExecutor;

impl CommandExecutor for SearchExecutor {
    type Config = SearchConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Searching for elementary cycles...\n",
            style("↻").cyan()
        );

        let mut progress = ProgressReporter::for_terminal();

        let graphs = load_inputs(&config.paths, &mut progress)?;
        if graphs.is_empty() {
            report_no_graphs();
            return Ok(());
        }

        let results = search_graphs(&graphs, &mut progress)?;
        let report = generate_report(config.format, config.max_cycles, &results)?;
        print!("{report}");

        if config.error_on_cycles && total_cycles(&results) > 0 {
            std::io::stdout().flush().into_diagnostic()?;
            std::process::exit(1);
        }

        Ok(())
    }
}
