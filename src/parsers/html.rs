use crate::error::ParseError;
use crate::parsers::ExtractOptions;
use crate::results::PageRecord;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Elements whose text never reaches the record
const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Extracts a record from HTML using the default limits
pub fn extract(html: &str, url: &str) -> Result<PageRecord, ParseError> {
    extract_with_options(html, url, &ExtractOptions::default())
}

/// Extracts title, description, headings, snippet and links from `html`.
///
/// `url` is validated and carried into the record unchanged.
pub fn extract_with_options(
    html: &str,
    url: &str,
    options: &ExtractOptions,
) -> Result<PageRecord, ParseError> {
    Url::parse(url)?;

    let doc = Html::parse_document(html);

    let title_selector = selector("title")?;
    let title = doc
        .select(&title_selector)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let meta_description = meta_description(&doc)?;

    let heading_selector = selector("h1, h2, h3")?;
    let headings = doc
        .select(&heading_selector)
        .map(element_text)
        .collect::<Vec<_>>();

    let paragraph_selector = selector("p")?;
    let paragraphs = doc
        .select(&paragraph_selector)
        .map(element_text)
        .filter(|text| text.chars().count() > options.min_paragraph_chars)
        .take(options.snippet_paragraphs)
        .collect::<Vec<_>>();
    let content_snippet = truncate_chars(&paragraphs.join(" "), options.snippet_max_chars);

    let link_selector = selector("a[href]")?;
    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .take(options.max_links)
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!(
        "Extracted from {}: {} headings, {} links, {} snippet chars",
        url,
        headings.len(),
        links.len(),
        content_snippet.chars().count()
    );

    Ok(PageRecord {
        url: url.to_string(),
        title,
        meta_description,
        headings,
        content_snippet,
        links,
    })
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// `<meta name="description">` first, then the Open Graph description
fn meta_description(doc: &Html) -> Result<String, ParseError> {
    let meta_selector = selector("meta[content]")?;
    let content_where = |attr: &str, wanted: &str| {
        doc.select(&meta_selector)
            .find(|e| {
                e.value()
                    .attr(attr)
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted))
            })
            .and_then(|e| e.value().attr("content"))
            .map(|content| content.trim().to_string())
    };

    Ok(content_where("name", "description")
        .or_else(|| content_where("property", "og:description"))
        .unwrap_or_default())
}

/// Whitespace-collapsed text of an element, skipping script and style content
fn element_text(element: ElementRef) -> String {
    let mut parts = Vec::new();
    push_text(element, &mut parts);
    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push(&**text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !SKIPPED_TAGS.contains(&child_element.value().name()) {
                push_text(child_element, out);
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}
