use crate::github::client::{RunsQuery, TransportError, WorkflowRunSource};
use crate::github::models::{WorkflowRun, WorkflowRunsPage};
use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and remembers what was asked for.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<WorkflowRunsPage, TransportError>>>,
    pub queries: Mutex<Vec<RunsQuery>>,
}

impl ScriptedSource {
    pub fn page(self, runs: Vec<WorkflowRun>) -> Self {
        self.push(Ok(WorkflowRunsPage {
            total_count: None,
            workflow_runs: Some(runs),
        }))
    }

    pub fn absent(self) -> Self {
        self.push(Ok(WorkflowRunsPage::default()))
    }

    pub fn failure(self, status: u16, message: &str) -> Self {
        self.push(Err(TransportError::Status {
            status,
            message: message.into(),
        }))
    }

    pub fn push(self, response: Result<WorkflowRunsPage, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.queries.lock().unwrap().iter().map(|q| q.page).collect()
    }
}

impl WorkflowRunSource for ScriptedSource {
    async fn fetch_page(&self, query: &RunsQuery) -> Result<WorkflowRunsPage, TransportError> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetched past the end of the script")
    }
}

impl WorkflowRunSource for &ScriptedSource {
    async fn fetch_page(&self, query: &RunsQuery) -> Result<WorkflowRunsPage, TransportError> {
        (**self).fetch_page(query).await
    }
}

pub fn run(name: &str, conclusion: Option<&str>, minutes: i64) -> WorkflowRun {
    let finished = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
    WorkflowRun {
        name: Some(name.into()),
        conclusion: conclusion.map(Into::into),
        created_at: None,
        run_started_at: Some(finished - chrono::Duration::minutes(minutes)),
        updated_at: Some(finished),
    }
}
