use crate::error::Error;
use crate::github::client::{RunsQuery, TransportError, WorkflowRunSource};
use crate::github::models::WorkflowRun;
use crate::util::time::created_after;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

pub const PAGE_SIZE: u8 = 100;

/// Drains every page of runs created after a cutoff, one request at a time.
pub struct RunFetcher<S> {
    source: S,
}

impl<S: WorkflowRunSource> RunFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Pages are requested from 1 upwards until one comes back empty or
    /// without a run list. `total_count` is never consulted. Any failing
    /// page fails the whole fetch.
    pub async fn fetch_all_runs(&self, cutoff: DateTime<Utc>) -> Result<Vec<WorkflowRun>, Error> {
        let created = created_after(cutoff);
        info!("Fetching workflow runs created {created}");

        let mut runs = Vec::new();
        let mut page = 1;

        loop {
            let query = RunsQuery {
                created: created.clone(),
                per_page: PAGE_SIZE,
                page,
            };

            let response = self.source.fetch_page(&query).await.map_err(upstream)?;

            let page_runs = match response.workflow_runs {
                Some(page_runs) if !page_runs.is_empty() => page_runs,
                _ => break,
            };

            debug!(
                "Page {page} returned {} runs (total_count: {:?})",
                page_runs.len(),
                response.total_count
            );

            runs.extend(page_runs);
            page += 1;
        }

        info!("Fetched {} workflow runs over {page} pages", runs.len());
        Ok(runs)
    }
}

fn upstream(err: TransportError) -> Error {
    error!("GitHub API call failed: {err}");

    Error::Upstream {
        status_code: err.status_code(),
        message: err.to_string(),
    }
}
