use crate::config::app_config::GitHubConfig;
use crate::github::models::WorkflowRunsPage;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use snafu::{ResultExt, Snafu};
use std::future::Future;

const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = "ci-health-checker (https://github.com/juanfridano/ci-health-checker)";

/// Query string for one page of `actions/runs`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunsQuery {
    pub created: String,
    pub per_page: u8,
    pub page: u32,
}

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum TransportError {
    #[snafu(display("{source}"))]
    Request { source: reqwest::Error },
    #[snafu(display("{message}"))]
    Status { status: u16, message: String },
    #[snafu(display("Malformed response body: {source}"))]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
}

impl TransportError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Request { source } => source.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } | TransportError::Decode { status, .. } => {
                Some(*status)
            }
        }
    }
}

/// Something that can serve pages of workflow runs for a fixed repository.
pub trait WorkflowRunSource {
    fn fetch_page(
        &self,
        query: &RunsQuery,
    ) -> impl Future<Output = Result<WorkflowRunsPage, TransportError>> + Send;
}

#[derive(Clone)]
pub struct GitHubClient {
    https: reqwest::Client,
    runs_url: String,
    authorization: String,
}

impl GitHubClient {
    pub fn new(https: reqwest::Client, config: &GitHubConfig) -> Self {
        let runs_url = format!(
            "{}/repos/{}/{}/actions/runs",
            config.api_url.trim_end_matches('/'),
            config.owner,
            config.repo
        );

        Self {
            https,
            runs_url,
            authorization: format!("Bearer {}", config.token()),
        }
    }
}

impl WorkflowRunSource for GitHubClient {
    async fn fetch_page(&self, query: &RunsQuery) -> Result<WorkflowRunsPage, TransportError> {
        let response = self
            .https
            .get(&self.runs_url)
            .query(query)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .context(RequestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(RequestSnafu)?;

        if !status.is_success() {
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };

            return StatusSnafu {
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        serde_json::from_str::<WorkflowRunsPage>(&body).context(DecodeSnafu {
            status: status.as_u16(),
        })
    }
}
