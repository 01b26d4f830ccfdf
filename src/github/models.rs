use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::util::time::whole_minutes_between;

/// A single workflow run as returned by `GET /repos/{owner}/{repo}/actions/runs`.
///
/// Only the fields the report needs are kept, and all of them are optional:
/// runs that are still queued have no conclusion, and older runs may lack
/// `run_started_at`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkflowRun {
    pub name: Option<String>,
    pub conclusion: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub run_started_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl WorkflowRun {
    /// Wall time between the run starting and its last update, 0 if either is unknown.
    pub fn duration_minutes(&self) -> i64 {
        match (self.run_started_at, self.updated_at) {
            (Some(started), Some(finished)) => whole_minutes_between(started, finished),
            _ => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.conclusion
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("success"))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct WorkflowRunsPage {
    /// Advisory only, pagination never relies on it.
    pub total_count: Option<u64>,
    pub workflow_runs: Option<Vec<WorkflowRun>>,
}
