//! Analysis runs over a single file or a directory tree.

use std::path::Path;

use engine_logging::engine_info;

use crate::filter::filter_by_keyword;
use crate::report::{
    Artifact, FILTERED_FILE, FILTERED_NOT_FILE, HEAD_FILE, INDEX_FILE, MERGED_FILE, REPORT_FILE,
    TAIL_FILE,
};
use crate::slice::head_tail;
use crate::source::{CorpusSource, DirectoryWalkSource, SourceError};
use crate::stats::compute_stats;
use crate::types::{Corpus, FileDescriptor, FilterResult, MatchCase, Slice, WordStats};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnalysis {
    pub stats: WordStats,
    pub partition: FilterResult,
    pub slice: Slice,
}

pub fn analyse_lines(
    lines: &[String],
    keyword: &str,
    case: MatchCase,
    slice_len: usize,
) -> LineAnalysis {
    LineAnalysis {
        stats: compute_stats(lines),
        partition: filter_by_keyword(lines, keyword, case),
        slice: head_tail(lines, slice_len),
    }
}

impl LineAnalysis {
    /// `filtered.txt`, `filtered_not.txt`, `head.txt`, `tail.txt`.
    pub fn artifacts(&self) -> Vec<Artifact> {
        vec![
            Artifact::new(FILTERED_FILE, self.partition.matching.clone()),
            Artifact::new(FILTERED_NOT_FILE, self.partition.non_matching.clone()),
            Artifact::new(HEAD_FILE, self.slice.head.clone()),
            Artifact::new(TAIL_FILE, self.slice.tail.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryAnalysis {
    pub descriptors: Vec<FileDescriptor>,
    pub merged: Corpus,
    pub stats: WordStats,
}

/// Walks `root` for files ending in `extension`.
///
/// Fails with [`SourceError::Exhausted`] when nothing matched, so no empty
/// report is ever written.
pub fn analyse_directory(root: &Path, extension: &str) -> Result<DirectoryAnalysis, SourceError> {
    let loaded = DirectoryWalkSource::new(root, extension).load()?;
    let stats = compute_stats(&loaded.units);
    engine_info!(
        "Walked {:?}: {} files, {} merged lines",
        root,
        loaded.meta.len(),
        loaded.units.len()
    );
    Ok(DirectoryAnalysis {
        descriptors: loaded.meta,
        merged: loaded.units,
        stats,
    })
}

impl DirectoryAnalysis {
    pub fn report_lines(&self) -> Vec<String> {
        self.descriptors.iter().map(FileDescriptor::report_line).collect()
    }

    pub fn index_lines(&self) -> Vec<String> {
        self.descriptors.iter().map(FileDescriptor::index_line).collect()
    }

    /// `report.txt`, `index.txt`, `merged.txt`.
    pub fn artifacts(&self) -> Vec<Artifact> {
        vec![
            Artifact::new(REPORT_FILE, self.report_lines()),
            Artifact::new(INDEX_FILE, self.index_lines()),
            Artifact::new(MERGED_FILE, self.merged.clone()),
        ]
    }
}
