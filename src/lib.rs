// Re-export modules
pub mod config;
pub mod error;
pub mod fetch;
pub mod parsers;
pub mod results;
pub mod robots;
pub mod storage;


// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use results::PageRecord;
pub use robots::PermissionDecision;

use fetch::Fetcher;
use parsers::ExtractOptions;
use std::path::PathBuf;
use url::Url;

/// How a run ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page was extracted and written to `path`
    Saved { path: PathBuf, record: PageRecord },
    /// robots.txt forbids the configured agent from fetching `url`; nothing was fetched or written
    Disallowed { url: String },
}

/// Trim user input and assume https when no scheme is given
pub fn normalize_url_input(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Runs the permission check, fetch, extract and persist stages for one URL
pub struct Scraper {
    config: ScraperConfig,
    fetcher: Fetcher,
}

impl Scraper {
    /// Create a scraper from a configuration
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::from_config(&config).map_err(error::ConfigError::from)?;
        Ok(Self { config, fetcher })
    }

    /// Scrape `url` once.
    ///
    /// Every stage after the permission check is terminal on failure, and no
    /// file is written unless extraction succeeded.
    pub async fn run(&self, url: &str) -> Result<Outcome, ScrapeError> {
        let target = parse_target(url)?;
        let decision = robots::check_permission(&self.fetcher, &target).await;
        if !decision.is_allowed() {
            ::log::info!(
                "robots.txt disallows {} for agent '{}'",
                url,
                self.fetcher.user_agent()
            );
            return Ok(Outcome::Disallowed {
                url: url.to_string(),
            });
        }

        ::log::info!("Fetching {}", target);
        let html = self.fetcher.fetch(target.as_str()).await?;

        let record = parsers::extract_with_options(&html, url, &ExtractOptions::from(&self.config))?;

        let path = storage::persist(&record, &self.config.output_dir)?;
        Ok(Outcome::Saved { path, record })
    }
}

/// Parse the input URL, accepting only http and https
fn parse_target(url: &str) -> Result<Url, ScrapeError> {
    let target = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match target.scheme() {
        "http" | "https" => Ok(target),
        scheme => Err(ScrapeError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
