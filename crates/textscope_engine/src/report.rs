use std::path::{Path, PathBuf};

use engine_logging::{engine_error, engine_info};

use crate::persist::{AtomicFileWriter, PersistError};

pub const FILTERED_FILE: &str = "filtered.txt";
pub const FILTERED_NOT_FILE: &str = "filtered_not.txt";
pub const HEAD_FILE: &str = "head.txt";
pub const TAIL_FILE: &str = "tail.txt";
pub const REPORT_FILE: &str = "report.txt";
pub const INDEX_FILE: &str = "index.txt";
pub const MERGED_FILE: &str = "merged.txt";

/// A named flat file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub lines: Vec<String>,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            lines,
        }
    }
}

#[derive(Debug)]
pub struct ArtifactOutcome {
    pub file_name: String,
    pub result: Result<PathBuf, PersistError>,
}

impl ArtifactOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Attempts every artifact, in order, even after a failure.
pub fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Vec<ArtifactOutcome> {
    let writer = AtomicFileWriter::new(out_dir.to_path_buf());
    artifacts
        .iter()
        .map(|artifact| {
            let result = writer.write_lines(&artifact.file_name, &artifact.lines);
            match &result {
                Ok(path) => engine_info!("Wrote {} lines to {:?}", artifact.lines.len(), path),
                Err(err) => engine_error!(
                    "Failed to write {} into {:?}: {}",
                    artifact.file_name,
                    writer.dir(),
                    err
                ),
            }
            ArtifactOutcome {
                file_name: artifact.file_name.clone(),
                result,
            }
        })
        .collect()
}
