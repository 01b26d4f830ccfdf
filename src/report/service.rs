use crate::error::Error;
use crate::github::client::WorkflowRunSource;
use crate::report::aggregate::{CiHealthReportEntry, aggregate};
use crate::report::fetcher::RunFetcher;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;

pub const DEFAULT_DAYS_BACK: i64 = 3;

pub struct ReportService<S> {
    fetcher: RunFetcher<S>,
}

impl<S: WorkflowRunSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self {
            fetcher: RunFetcher::new(source),
        }
    }

    pub async fn generate_report(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<CiHealthReportEntry>, Error> {
        let runs = self.fetcher.fetch_all_runs(since).await?;
        let entries = aggregate(&runs);

        info!(
            "Aggregated {} runs into {} workflows",
            runs.len(),
            entries.len()
        );

        Ok(entries)
    }

    pub async fn generate_report_for_days_back(
        &self,
        days_back: i64,
    ) -> Result<Vec<CiHealthReportEntry>, Error> {
        self.generate_report(cutoff(Utc::now(), days_back)?).await
    }
}

pub fn cutoff(now: DateTime<Utc>, days_back: i64) -> Result<DateTime<Utc>, Error> {
    TimeDelta::try_days(days_back)
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or(Error::InvalidDaysBack { days_back })
}
