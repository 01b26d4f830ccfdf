use crate::config::app_config::Config;
use crate::github::client::GitHubClient;
use crate::report::service::ReportService;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub reports: Arc<ReportService<GitHubClient>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let client = GitHubClient::new(reqwest::Client::new(), &config.github);

        Self {
            reports: Arc::new(ReportService::new(client)),
        }
    }
}
