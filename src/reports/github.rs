//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::{GraphCycles, total_cycles};
use crate::error::CycleSearchError;
use crate::utils::string::{format_cycle_path, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CycleSearchError> {
        let mut output = String::new();
        let total = total_cycles(results);

        if total == 0 {
            writeln!(output, "::notice title=Cycle Search::No cycles detected! ✅")?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Cycles::Found {} elementary {}",
            total,
            pluralize("cycle", total)
        )?;

        for graph in results.iter().filter(|g| g.has_cycles()) {
            for (i, cycle) in graph.cycles.iter().enumerate() {
                writeln!(
                    output,
                    "::warning title={} cycle {}::{}",
                    graph.name,
                    i + 1,
                    format_cycle_path(cycle.nodes())
                )?;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::sample_results;

    #[test]
    fn test_github_report_no_cycles() {
        let report = GitHubReportGenerator::new().generate_report(&[]).unwrap();
        assert_eq!(report, "::notice title=Cycle Search::No cycles detected! ✅\n");
    }

    #[test]
    fn test_github_report_annotations() {
        let report = GitHubReportGenerator::new()
            .generate_report(&sample_results())
            .unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "::error title=Cycles::Found 2 elementary cycles",
                "::warning title=chain cycle 1::a → b → a",
                "::warning title=chain cycle 2::b → c → b",
            ]
        );
    }
}
