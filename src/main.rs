use clap::Parser;
use scrape_page::{Outcome, Scraper, normalize_url_input};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let url = match args.target_url() {
        Ok(url) => normalize_url_input(&url),
        Err(e) => {
            eprintln!("Error: failed to read URL: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Scraping {} as '{}'", url, config.user_agent);

    let scraper = match Scraper::new(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match scraper.run(&url).await {
        Ok(Outcome::Saved { path, record }) => {
            println!(
                "Saved '{}' ({} headings, {} links) to {}",
                record.title,
                record.headings.len(),
                record.links.len(),
                path.display()
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::Disallowed { url }) => {
            println!("robots.txt does not allow fetching {}; nothing was saved", url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
