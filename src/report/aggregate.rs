use crate::github::models::WorkflowRun;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CiHealthReportEntry {
    /// `None` collects the runs GitHub returned without a name.
    pub workflow_name: Option<String>,
    pub total_runs: u64,
    pub failures: u64,
    /// Percentage in `0.0..=100.0`.
    pub failure_rate: f64,
    pub avg_duration_minutes: f64,
}

#[derive(Default)]
struct Tally {
    runs: u64,
    failures: u64,
    duration_minutes: i64,
}

impl Tally {
    fn add(&mut self, run: &WorkflowRun) {
        self.runs += 1;
        if !run.is_success() {
            self.failures += 1;
        }
        self.duration_minutes += run.duration_minutes();
    }

    fn into_entry(self, workflow_name: Option<String>) -> CiHealthReportEntry {
        let (failure_rate, avg_duration_minutes) = if self.runs == 0 {
            (0.0, 0.0)
        } else {
            (
                self.failures as f64 * 100.0 / self.runs as f64,
                self.duration_minutes as f64 / self.runs as f64,
            )
        };

        CiHealthReportEntry {
            workflow_name,
            total_runs: self.runs,
            failures: self.failures,
            failure_rate,
            avg_duration_minutes,
        }
    }
}

/// One entry per distinct workflow name, in no particular order.
pub fn aggregate(runs: &[WorkflowRun]) -> Vec<CiHealthReportEntry> {
    let mut tallies: HashMap<Option<&str>, Tally> = HashMap::new();

    for run in runs {
        tallies.entry(run.name.as_deref()).or_default().add(run);
    }

    tallies
        .into_iter()
        .map(|(name, tally)| tally.into_entry(name.map(str::to_string)))
        .collect()
}
