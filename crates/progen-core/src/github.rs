//! GitHub integration: remote repository creation and the initial push.

use crate::shell::Shell;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("no GitHub token found; set GITHUB_TOKEN or GITHUB_OAUTH_ACCESS_TOKEN")]
    MissingToken,

    #[error("your GitHub credentials are bad")]
    BadCredentials,

    #[error("GitHub API request failed with status {status}")]
    Api { status: StatusCode },

    #[error("GitHub API request failed")]
    Transport(#[from] reqwest::Error),

    #[error("`{command}` exited with code {code}")]
    Git { command: String, code: i32 },

    #[error("failed to run `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// A freshly created remote repository.
#[derive(Debug, Clone)]
pub struct Repository {
    pub name: String,
    /// Owner login, used to build the remote URL.
    pub owner_login: String,
}

#[derive(Deserialize)]
struct ApiRepository {
    name: String,
    owner: ApiOwner,
}

#[derive(Deserialize)]
struct ApiOwner {
    login: String,
}

/// Authenticated GitHub client for repository creation.
#[derive(Debug)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    /// Build a client from the `GITHUB_TOKEN` or `GITHUB_OAUTH_ACCESS_TOKEN`
    /// environment variable.
    pub fn from_env() -> Result<Self, GithubError> {
        let token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GITHUB_OAUTH_ACCESS_TOKEN"))
            .map_err(|_| GithubError::MissingToken)?;
        Ok(Self::new(DEFAULT_API_URL, token))
    }

    /// The API URL is overridable for tests.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("progen")
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Create a repository under the authenticated user.
    pub fn create_repo(&self, name: &str, public: bool) -> Result<Repository, GithubError> {
        let url = format!("{}/user/repos", self.api_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "name": name, "private": !public }))
            .send()?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(GithubError::BadCredentials),
            status if !status.is_success() => Err(GithubError::Api { status }),
            _ => {
                let repo: ApiRepository = response.json()?;
                Ok(Repository {
                    name: repo.name,
                    owner_login: repo.owner.login,
                })
            }
        }
    }
}

/// Initialize a git repository at `path` and push it to the remote.
///
/// Every git command runs with `path` as its explicit working directory; the
/// process-wide current directory is never changed.
pub fn push_initial(
    shell: &dyn Shell,
    path: &std::path::Path,
    repo: &Repository,
    message: &str,
) -> Result<(), GithubError> {
    let remote = format!(
        "https://github.com/{}/{}.git",
        repo.owner_login, repo.name
    );
    let commands = [
        "git init".to_string(),
        "git add .".to_string(),
        format!("git commit -m \"{message}\""),
        format!("git remote add origin {remote}"),
        "git push -u origin master".to_string(),
    ];
    for command in &commands {
        let code = shell
            .run_streamed(command, Some(path))
            .map_err(|source| GithubError::Io {
                command: command.clone(),
                source,
            })?;
        if code != 0 {
            return Err(GithubError::Git {
                command: command.clone(),
                code,
            });
        }
    }
    Ok(())
}
