pub mod html;


pub use html::{extract, extract_with_options};

use crate::config::ScraperConfig;

/// Limits applied while extracting a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Maximum number of links kept
    pub max_links: usize,
    /// Number of qualifying paragraphs joined into the snippet
    pub snippet_paragraphs: usize,
    /// Upper bound on snippet length, in characters
    pub snippet_max_chars: usize,
    /// Paragraphs at or below this many characters are skipped as boilerplate
    pub min_paragraph_chars: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_links: 20,
            snippet_paragraphs: 3,
            snippet_max_chars: 500,
            min_paragraph_chars: 20,
        }
    }
}

impl From<&ScraperConfig> for ExtractOptions {
    fn from(config: &ScraperConfig) -> Self {
        Self {
            max_links: config.max_links,
            snippet_paragraphs: config.snippet_paragraphs,
            snippet_max_chars: config.snippet_max_chars,
            ..Self::default()
        }
    }
}
