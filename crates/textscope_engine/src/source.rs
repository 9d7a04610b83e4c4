//! Corpus source adapters: a single file, a directory walk, or the
//! paragraphs of an already-parsed web document.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use engine_logging::{engine_debug, engine_warn};
use scraper::Html;
use thiserror::Error;
use walkdir::WalkDir;

use crate::extract::Extractor;
use crate::types::{Corpus, FileDescriptor, FileMeta};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),
    #[error("expected a file but found a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("nothing found: no {what} in {origin}")]
    Exhausted { what: &'static str, origin: String },
}

/// The corpus a source produced, plus what the source knows about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<M> {
    pub units: Corpus,
    pub meta: M,
}

pub trait CorpusSource {
    type Meta;

    fn load(&self) -> Result<Loaded<Self::Meta>, SourceError>;
}

/// Every line of one regular file.
#[derive(Debug, Clone)]
pub struct SingleFileSource {
    path: PathBuf,
}

impl SingleFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for SingleFileSource {
    type Meta = FileMeta;

    fn load(&self) -> Result<Loaded<FileMeta>, SourceError> {
        let metadata = fs::metadata(&self.path).map_err(|err| stat_error(&self.path, err))?;
        if metadata.is_dir() {
            return Err(SourceError::IsDirectory(self.path.clone()));
        }
        let modified = metadata.modified().map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let units = read_lines(&self.path)?;
        engine_debug!("Read {} lines from {:?}", units.len(), self.path);
        Ok(Loaded {
            units,
            meta: FileMeta {
                size_bytes: metadata.len(),
                modified_at: DateTime::<Local>::from(modified),
            },
        })
    }
}

/// Lines of every file under `root` whose name ends with `extension`,
/// concatenated in walk order (entries sorted by file name per directory).
#[derive(Debug, Clone)]
pub struct DirectoryWalkSource {
    root: PathBuf,
    extension: String,
}

impl DirectoryWalkSource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        name.ends_with(self.extension.as_str())
    }
}

impl CorpusSource for DirectoryWalkSource {
    type Meta = Vec<FileDescriptor>;

    fn load(&self) -> Result<Loaded<Vec<FileDescriptor>>, SourceError> {
        fs::metadata(&self.root).map_err(|err| stat_error(&self.root, err))?;

        let mut descriptors = Vec::new();
        let mut merged = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    engine_warn!("Skipping walk entry under {:?}: {}", self.root, err);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            let described = entry
                .metadata()
                .map_err(io::Error::from)
                .and_then(|meta| Ok((meta.len(), meta.modified()?)));
            let (size_bytes, modified) = match described {
                Ok(pair) => pair,
                Err(err) => {
                    engine_warn!("Skipping {:?}: cannot stat: {}", path, err);
                    continue;
                }
            };
            let lines = match read_lines(path) {
                Ok(lines) => lines,
                Err(err) => {
                    engine_warn!("Skipping {:?}: {}", path, err);
                    continue;
                }
            };

            engine_debug!("Visited {:?} ({} bytes, {} lines)", path, size_bytes, lines.len());
            descriptors.push(FileDescriptor {
                path: path.to_path_buf(),
                size_bytes,
                modified_at: DateTime::<Local>::from(modified),
            });
            merged.extend(lines);
        }

        if descriptors.is_empty() {
            return Err(SourceError::Exhausted {
                what: "matching files",
                origin: self.root.display().to_string(),
            });
        }
        Ok(Loaded {
            units: merged,
            meta: descriptors,
        })
    }
}

/// Trimmed, non-empty paragraphs of a parsed document.
pub struct WebParagraphSource<'a, E: Extractor> {
    document: &'a Html,
    extractor: &'a E,
}

impl<'a, E: Extractor> WebParagraphSource<'a, E> {
    pub fn new(document: &'a Html, extractor: &'a E) -> Self {
        Self {
            document,
            extractor,
        }
    }
}

impl<E: Extractor> CorpusSource for WebParagraphSource<'_, E> {
    type Meta = ();

    fn load(&self) -> Result<Loaded<()>, SourceError> {
        let units: Corpus = self
            .extractor
            .paragraph_texts(self.document)
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        if units.is_empty() {
            return Err(SourceError::Exhausted {
                what: "paragraphs",
                origin: "document".to_string(),
            });
        }
        Ok(Loaded { units, meta: () })
    }
}

/// Reads `path` as newline-separated lines.
///
/// A trailing `\r` is stripped from each line and invalid UTF-8 is replaced,
/// so binary noise never aborts a read.
pub fn read_lines(path: &Path) -> Result<Corpus, SourceError> {
    let read_error = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;

    let mut lines = Vec::new();
    for chunk in BufReader::new(file).split(b'\n') {
        let mut bytes = chunk.map_err(read_error)?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(lines)
}

fn stat_error(path: &Path, err: io::Error) -> SourceError {
    if err.kind() == io::ErrorKind::NotFound {
        SourceError::NotFound(path.to_path_buf())
    } else {
        SourceError::Read {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
