//! `.gitignore` assembly from the github/gitignore template collection.

use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/github/gitignore/master";

/// Generic entries used when the template collection is unreachable, so a
/// project generated offline still gets a usable `.gitignore`.
const OFFLINE_FALLBACK: &str = "\
# OS and editor junk
.DS_Store
Thumbs.db
*.swp
*~
";

/// Fetches and concatenates per-language `.gitignore` templates.
///
/// Languages use the collection's file names (`C`, `Go`, `Node`, ...). A
/// template that does not exist (non-200 response) is skipped silently; a
/// transport failure falls back to [`OFFLINE_FALLBACK`] and is surfaced as a
/// warning so generation can continue offline.
pub struct GitignoreFetcher {
    client: Client,
    base_url: String,
}

/// Assembled `.gitignore` content plus any warnings hit along the way.
#[derive(Debug)]
pub struct GitignoreContent {
    pub content: String,
    pub warnings: Vec<String>,
}

impl Default for GitignoreFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GitignoreFetcher {
    /// The base URL is overridable for tests.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn fetch(&self, languages: &[&str]) -> GitignoreContent {
        let mut content = String::new();
        let mut warnings = Vec::new();

        for language in languages {
            let url = format!("{}/{}.gitignore", self.base_url, language);
            match self.client.get(&url).send() {
                Ok(response) if response.status().is_success() => match response.text() {
                    Ok(body) => content.push_str(&body),
                    Err(err) => {
                        tracing::warn!(language, %err, "failed to read gitignore template body");
                        warnings.push(format!("could not read the {language} gitignore template"));
                    }
                },
                Ok(response) => {
                    tracing::debug!(language, status = %response.status(), "no gitignore template");
                }
                Err(err) => {
                    tracing::warn!(language, %err, "gitignore template fetch failed");
                    warnings.push(format!(
                        "could not fetch the {language} gitignore template ({err})"
                    ));
                }
            }
        }

        if content.is_empty() && !languages.is_empty() {
            content.push_str(OFFLINE_FALLBACK);
        }
        GitignoreContent { content, warnings }
    }
}
