use crate::config::ScraperConfig;
use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;

/// HTTP client that identifies itself with a fixed User-Agent.
///
/// Issues exactly one GET per call. Redirects follow reqwest's default policy
/// and nothing is retried.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    /// Build a client sending `user_agent` with every request and giving up after `timeout`
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.user_agent, config.timeout())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the body as text. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
