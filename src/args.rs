use clap::Parser;
use scrape_page::ScraperConfig;
use scrape_page::error::ConfigError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrape-page")]
#[command(about = "Scrape a single page into a JSON record, honoring robots.txt")]
#[command(version)]
pub struct Args {
    /// Page to scrape; prompted for on stdin when omitted
    pub url: Option<String>,

    /// Agent identity sent as User-Agent (overrides USER_AGENT)
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// Directory the JSON record is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then the environment, then flags
    pub fn load_config(&self) -> Result<ScraperConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        let mut config = config
            .with_env_overrides()
            .with_user_agent_override(self.user_agent.clone());
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }

    /// The URL from the command line, or one line read from stdin
    pub fn target_url(&self) -> io::Result<String> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None => prompt_for_url(&mut io::stdin().lock(), &mut io::stdout()),
        }
    }
}

fn prompt_for_url(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "Enter URL: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
