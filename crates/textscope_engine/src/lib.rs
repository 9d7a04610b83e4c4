//! Textscope engine: corpus sources, statistics, filtering, slicing and
//! flat-file reports.
mod analysis;
mod decode;
mod extract;
mod fetch;
mod filename;
mod filter;
mod persist;
mod report;
mod settings;
mod slice;
mod source;
mod stats;
mod types;
mod wiki;

pub use analysis::{analyse_directory, analyse_lines, DirectoryAnalysis, LineAnalysis};
pub use decode::{decode_html, DecodedHtml};
pub use extract::{ContentParagraphExtractor, ExtractError, Extractor, MAIN_CONTENT_PARAGRAPHS};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use filename::article_file_name;
pub use filter::filter_by_keyword;
pub use persist::{ensure_output_dir, write_lines, AtomicFileWriter, PersistError};
pub use report::{
    write_artifacts, Artifact, ArtifactOutcome, FILTERED_FILE, FILTERED_NOT_FILE, HEAD_FILE,
    INDEX_FILE, MERGED_FILE, REPORT_FILE, TAIL_FILE,
};
pub use settings::{
    load_settings, parse_json, parse_key_value, try_load_settings, Settings, SettingsError,
    SettingsOverrides,
};
pub use slice::{head_tail, parse_slice_len};
pub use source::{
    read_lines, CorpusSource, DirectoryWalkSource, Loaded, SingleFileSource, SourceError,
    WebParagraphSource,
};
pub use stats::compute_stats;
pub use types::{
    Corpus, FailureKind, FetchError, FetchedPage, FileDescriptor, FileMeta, FilterResult,
    MatchCase, Slice, TextUnit, WordStats,
};
pub use wiki::{analyse_wiki, wiki_base_url, WikiClient, WikiError, WikiSummary};
