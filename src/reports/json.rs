//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::{GraphCycles, total_cycles};
use crate::error::CycleSearchError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CycleSearchError> {
        // Cycles keep discovery order
        let graphs: Vec<_> = results
            .iter()
            .map(|graph| {
                let cycles: Vec<_> = graph.cycles.iter().map(|cycle| cycle.nodes()).collect();
                json!({
                    "name": graph.name,
                    "node_count": graph.node_count,
                    "edge_count": graph.edge_count,
                    "cycle_count": graph.cycle_count(),
                    "cycles": cycles,
                })
            })
            .collect();

        let total = total_cycles(results);
        let report = json!({
            "has_cycles": total > 0,
            "cycle_count": total,
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(CycleSearchError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures::sample_results;

    #[test]
    fn test_json_report_no_cycles() {
        let report = JsonReportGenerator::new().generate_report(&[]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["graphs"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycles() {
        let report = JsonReportGenerator::new()
            .generate_report(&sample_results())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 2);

        let chain = &json["graphs"][0];
        assert_eq!(chain["name"], "chain");
        assert_eq!(chain["node_count"], 3);
        assert_eq!(chain["cycles"], json!([["a", "b"], ["b", "c"]]));

        let tree = &json["graphs"][1];
        assert_eq!(tree["cycle_count"], 0);
        assert_eq!(tree["cycles"], json!([]));
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator::new().generate_report(&[]).unwrap();
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
