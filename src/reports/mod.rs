//! Report generation modules for different output formats
//!
//! - human: styled console output
//! - json: JSON for programmatic use
//! - github: GitHub Actions workflow annotations

pub mod github;
pub mod human;
pub mod json;

use crate::core::GraphCycles;
use crate::error::CycleSearchError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the cycles found in each graph
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CycleSearchError>;
}

pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::GraphCycles;
    use crate::detector::CycleDetector;

    /// Results for a graph with cycles `a → b` and `b → c`, plus an acyclic one
    pub fn sample_results() -> Vec<GraphCycles> {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let matrix = vec![
            vec![false, true, false],
            vec![true, false, true],
            vec![false, true, false],
        ];
        let mut detector = CycleDetector::new();
        detector
            .detect_cycles(&matrix, &labels)
            .expect("valid matrix");

        vec![
            GraphCycles {
                name: "chain".to_string(),
                node_count: 3,
                edge_count: 4,
                cycles: detector.into_cycles(),
            },
            GraphCycles {
                name: "tree".to_string(),
                node_count: 2,
                edge_count: 1,
                cycles: Vec::new(),
            },
        ]
    }
}
