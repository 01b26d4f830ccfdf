use serde::Deserialize;
use snafu::{OptionExt, ResultExt, Whatever};
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub github: GitHubConfig,
}

/// Repository the report is generated for, plus the credential used to read it.
#[derive(Deserialize, Debug, Clone)]
pub struct GitHubConfig {
    #[serde(default)]
    pub token: Option<String>,
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Reads the file at `CONFIG_PATH` (or `./config.yml`). `GITHUB_TOKEN`
    /// takes precedence over the token in the file.
    pub fn load() -> Result<Self, Whatever> {
        let path = env::var("CONFIG_PATH").unwrap_or("./config.yml".to_string());
        let mut config = Self::load_from(&path)?;

        if let Ok(token) = env::var("GITHUB_TOKEN") {
            config.github.token = Some(token);
        }

        config.validate()?;
        info!(
            "Loaded configuration for {}/{}",
            config.github.owner, config.github.repo
        );

        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Whatever> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_whatever_context(|_| format!("Failed to read {}", path.display()))?;

        Self::parse(&contents)
            .with_whatever_context(|_| format!("Failed to deserialize {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str::<Self>(contents)
    }

    fn validate(&self) -> Result<(), Whatever> {
        self.github
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .whatever_context("No GitHub token configured, set github.token or GITHUB_TOKEN")?;

        if self.github.owner.is_empty() || self.github.repo.is_empty() {
            snafu::whatever!("github.owner and github.repo must not be empty");
        }

        Ok(())
    }
}

impl GitHubConfig {
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}
