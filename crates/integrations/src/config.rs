use std::time::Duration;

/// Settings for the outbound service clients.
///
/// | Env var                    | Default                                  |
/// |----------------------------|------------------------------------------|
/// | `OPENAI_ACCESS_TOKEN`      | unset (AI features degrade)              |
/// | `OPENAI_BASE_URL`          | `https://api.openai.com`                 |
/// | `YOUTUBE_API_KEY`          | unset (video search degrades)            |
/// | `YOUTUBE_BASE_URL`         | `https://www.googleapis.com/youtube/v3`  |
/// | `INTEGRATION_TIMEOUT_SECS` | `20`                                     |
#[derive(Debug, Clone)]
pub struct IntegrationsConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            youtube_api_key: None,
            youtube_base_url: DEFAULT_YOUTUBE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl IntegrationsConfig {
    /// Load from environment variables, falling back to defaults.
    ///
    /// # Panics
    ///
    /// Panics if `INTEGRATION_TIMEOUT_SECS` is set but not a valid `u64`.
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("INTEGRATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("INTEGRATION_TIMEOUT_SECS must be a valid u64");

        Self {
            openai_api_key: non_empty_var("OPENAI_ACCESS_TOKEN"),
            openai_base_url: non_empty_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            youtube_api_key: non_empty_var("YOUTUBE_API_KEY"),
            youtube_base_url: non_empty_var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string()),
            timeout_secs,
        }
    }

    /// Shared HTTP client with the configured request timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }
}
