use serde::{Deserialize, Serialize};

/// Structured data extracted from one page
///
/// Every field is always serialized; absent markup yields an empty string or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageRecord {
    /// URL as supplied by the caller
    pub url: String,

    /// Text of the `<title>` element
    pub title: String,

    /// `content` of the description meta tag
    pub meta_description: String,

    /// Text of every h1, h2 and h3, in document order
    pub headings: Vec<String>,

    /// Leading paragraph text
    pub content_snippet: String,

    /// `href` values of the first anchors, as written in the page
    pub links: Vec<String>,
}
