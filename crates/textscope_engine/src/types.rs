use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local, SecondsFormat};

/// One line (file sources) or one paragraph (web source).
pub type TextUnit = String;

/// Ordered sequence of text units produced by a single source.
pub type Corpus = Vec<TextUnit>;

/// Aggregate word statistics over a corpus, integer tokens excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordStats {
    pub total_words: usize,
    pub total_length: usize,
}

impl WordStats {
    /// Truncated average word length, or `None` when no word was counted.
    pub fn average_word_length(&self) -> Option<usize> {
        if self.total_words == 0 {
            None
        } else {
            Some(self.total_length / self.total_words)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Sensitive,
    Insensitive,
}

/// Total, order-preserving partition of a corpus by keyword containment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterResult {
    pub matching: Corpus,
    pub non_matching: Corpus,
}

/// Head and tail of the same corpus; the two may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slice {
    pub head: Corpus,
    pub tail: Corpus,
}

/// Size and modification time of a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub size_bytes: u64,
    pub modified_at: DateTime<Local>,
}

impl FileMeta {
    pub fn modified_rfc3339(&self) -> String {
        format_rfc3339(&self.modified_at)
    }
}

/// One file matched during a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified_at: DateTime<Local>,
}

impl FileDescriptor {
    /// `File: <path> | Size: <bytes>`
    pub fn report_line(&self) -> String {
        format!("File: {} | Size: {}", self.path.display(), self.size_bytes)
    }

    /// `<path> | <bytes> | <RFC3339 timestamp>`
    pub fn index_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.path.display(),
            self.size_bytes,
            format_rfc3339(&self.modified_at)
        )
    }
}

fn format_rfc3339(at: &DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// An HTML response body and where it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64 },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes } => write!(f, "larger than {max_bytes} bytes"),
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "undecodable body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn average_is_truncated_and_absent_without_words() {
        let stats = WordStats {
            total_words: 3,
            total_length: 11,
        };
        assert_eq!(stats.average_word_length(), Some(3));
        assert_eq!(WordStats::default().average_word_length(), None);
    }

    #[test]
    fn descriptor_lines_use_pipe_separators() {
        let modified_at = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let descriptor = FileDescriptor {
            path: PathBuf::from("data/a.txt"),
            size_bytes: 42,
            modified_at,
        };

        assert_eq!(descriptor.report_line(), "File: data/a.txt | Size: 42");
        let index = descriptor.index_line();
        assert!(index.starts_with("data/a.txt | 42 | 2024-03-01T12:30:00"));
        let stamp = index.rsplit(" | ").next().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
