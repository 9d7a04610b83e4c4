//! Wikipedia article fetching and the summary document built from it.

use engine_logging::engine_info;
use scraper::Html;
use thiserror::Error;
use url::Url;

use crate::decode::decode_html;
use crate::extract::{ContentParagraphExtractor, Extractor};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::filename::article_file_name;
use crate::filter::filter_by_keyword;
use crate::report::Artifact;
use crate::source::{CorpusSource, SourceError, WebParagraphSource};
use crate::stats::compute_stats;
use crate::types::{Corpus, FetchError, MatchCase, WordStats};

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("article name is empty")]
    EmptyArticle,
    #[error("invalid wiki url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl WikiError {
    /// The page was fetched but held no usable paragraph.
    pub fn is_nothing_found(&self) -> bool {
        matches!(self, WikiError::Source(SourceError::Exhausted { .. }))
    }
}

pub struct WikiClient<F = ReqwestFetcher, E = ContentParagraphExtractor> {
    base_url: Url,
    fetcher: F,
    extractor: E,
}

/// `https://<lang>.wikipedia.org/wiki/`.
pub fn wiki_base_url(lang: &str) -> String {
    format!("https://{}.wikipedia.org/wiki/", lang.trim())
}

impl WikiClient {
    /// Client for [`wiki_base_url`] of `lang`.
    pub fn new(lang: &str, settings: FetchSettings) -> Result<Self, WikiError> {
        Self::at(&wiki_base_url(lang), settings)
    }

    /// Client for any MediaWiki article root, such as a mirror.
    pub fn at(base_url: &str, settings: FetchSettings) -> Result<Self, WikiError> {
        Self::with_parts(
            base_url,
            ReqwestFetcher::new(settings)?,
            ContentParagraphExtractor::new(),
        )
    }
}

impl<F: Fetcher, E: Extractor> WikiClient<F, E> {
    pub fn with_parts(base_url: &str, fetcher: F, extractor: E) -> Result<Self, WikiError> {
        let mut base_url = Url::parse(base_url).map_err(|err| WikiError::InvalidUrl {
            url: base_url.to_string(),
            message: err.to_string(),
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            fetcher,
            extractor,
        })
    }

    pub fn article_url(&self, article: &str) -> Result<Url, WikiError> {
        let article = article.trim().trim_start_matches('/');
        if article.is_empty() {
            return Err(WikiError::EmptyArticle);
        }
        // A bare `Portail:X` would parse as an absolute URL with scheme `portail`.
        self.base_url
            .join(&format!("./{article}"))
            .map_err(|err| WikiError::InvalidUrl {
                url: article.to_string(),
                message: err.to_string(),
            })
    }

    /// Fetches the article and returns its non-empty paragraphs in order.
    pub async fn fetch_paragraphs(&self, article: &str) -> Result<Corpus, WikiError> {
        let url = self.article_url(article)?;
        let page = self.fetcher.fetch(url.as_str()).await?;
        let decoded = decode_html(&page.bytes, page.content_type.as_deref())?;

        let document = Html::parse_document(&decoded.html);
        let loaded = WebParagraphSource::new(&document, &self.extractor).load()?;
        engine_info!(
            "Fetched {} ({} bytes, {}): {} paragraphs",
            page.url,
            page.bytes.len(),
            decoded.encoding_label,
            loaded.units.len()
        );
        Ok(loaded.units)
    }
}

/// Everything written to `wiki_<article>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiSummary {
    pub article: String,
    pub paragraph_count: usize,
    pub stats: WordStats,
    pub keyword: String,
    pub matching: Corpus,
}

/// Statistics over all paragraphs, then the paragraphs that contain
/// `keyword` regardless of case.
pub fn analyse_wiki(article: &str, paragraphs: &[String], keyword: &str) -> WikiSummary {
    let stats = compute_stats(paragraphs);
    let partition = filter_by_keyword(paragraphs, keyword, MatchCase::Insensitive);
    WikiSummary {
        article: article.to_string(),
        paragraph_count: paragraphs.len(),
        stats,
        keyword: keyword.to_string(),
        matching: partition.matching,
    }
}

impl WikiSummary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Article: {}", self.article),
            format!("Total paragraphs: {}", self.paragraph_count),
            format!("Total words: {}", self.stats.total_words),
            format!(
                "Average word length: {}",
                self.stats.average_word_length().unwrap_or(0)
            ),
            String::new(),
            format!("Paragraphs containing '{}':", self.keyword),
        ];
        lines.extend(self.matching.iter().cloned());
        lines
    }

    pub fn artifact(&self) -> Artifact {
        Artifact::new(article_file_name(&self.article), self.lines())
    }
}
