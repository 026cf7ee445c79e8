//! Run reports for the split engine

use serde::Serialize;

use crate::error::Result;

/// Summary of one balanced-split run
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Number of input treasures
    pub treasures: usize,
    /// Search states explored
    pub explored: u64,
    /// Configured exploration budget
    pub node_budget: u64,
    /// Equal value awarded to each of the two balanced members
    pub equal_value: u64,
    /// Value left with the captain
    pub reserve_value: u64,
}

impl SplitReport {
    /// Share of the node budget consumed, as a percentage
    pub fn budget_used_percentage(&self) -> f64 {
        if self.node_budget > 0 {
            (self.explored as f64 / self.node_budget as f64) * 100.0
        } else {
            0.0
        }
    }

    /// One-line summary for embedding in logs
    pub fn to_log_string(&self) -> String {
        format!(
            "split: {} treasures, {} states ({:.1}% of budget), equal value {}, reserve {}",
            self.treasures,
            self.explored,
            self.budget_used_percentage(),
            self.equal_value,
            self.reserve_value,
        )
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print a formatted report to stderr
    pub fn print_report(&self) {
        eprintln!("{}", "=".repeat(60));
        eprintln!("BALANCED SPLIT REPORT");
        eprintln!("{}", "=".repeat(60));
        eprintln!("Treasures:   {:>10}", self.treasures);
        eprintln!(
            "States:      {:>10} ({:.1}% of budget {})",
            self.explored,
            self.budget_used_percentage(),
            self.node_budget
        );
        eprintln!("Equal value: {:>10}", self.equal_value);
        eprintln!("Reserve:     {:>10}", self.reserve_value);
        eprintln!("{}", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SplitReport {
        SplitReport {
            treasures: 6,
            explored: 50,
            node_budget: 200,
            equal_value: 9,
            reserve_value: 3,
        }
    }

    #[test]
    fn test_budget_used_percentage() {
        assert!((sample().budget_used_percentage() - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_budget_reads_as_zero_percent() {
        let report = SplitReport {
            node_budget: 0,
            ..sample()
        };
        assert_eq!(report.budget_used_percentage(), 0.0);
    }

    #[test]
    fn test_log_string_mentions_the_numbers() {
        let log = sample().to_log_string();
        assert!(log.contains("6 treasures"));
        assert!(log.contains("equal value 9"));
        assert!(log.contains("reserve 3"));
    }

    #[test]
    fn test_json_rendering() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"equal_value\": 9"));
        assert!(json.contains("\"explored\": 50"));
    }

    #[test]
    fn test_print_report_does_not_panic() {
        sample().print_report();
    }
}
