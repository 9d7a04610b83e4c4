use scraper::{Html, Selector};

/// Paragraphs inside the main article body of a MediaWiki page.
pub const MAIN_CONTENT_PARAGRAPHS: &str = "#mw-content-text p";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid css selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

pub trait Extractor {
    /// Raw text of every paragraph node, in document order, untrimmed.
    fn paragraph_texts(&self, doc: &Html) -> Vec<String>;
}

/// Selects paragraph elements under the main content region and joins the
/// text of all their descendants.
#[derive(Debug, Clone)]
pub struct ContentParagraphExtractor {
    selector: Option<Selector>,
}

impl ContentParagraphExtractor {
    pub fn new() -> Self {
        Self {
            selector: Selector::parse(MAIN_CONTENT_PARAGRAPHS).ok(),
        }
    }

    pub fn with_selector(selector: &str) -> Result<Self, ExtractError> {
        let parsed = Selector::parse(selector).map_err(|err| ExtractError::InvalidSelector {
            selector: selector.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            selector: Some(parsed),
        })
    }
}

impl Default for ContentParagraphExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ContentParagraphExtractor {
    fn paragraph_texts(&self, doc: &Html) -> Vec<String> {
        let Some(selector) = self.selector.as_ref() else {
            return Vec::new();
        };
        doc.select(selector)
            .map(|node| node.text().collect::<String>())
            .collect()
    }
}
