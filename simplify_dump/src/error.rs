use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    #[error("error reading input file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error parsing line {line}: {source} (content: {excerpt})")]
    Parse {
        line: usize,
        excerpt: String,
        source: serde_json::Error,
    },
    #[error("line {line} is not valid utf-8: {source}")]
    Encoding {
        line: usize,
        source: std::str::Utf8Error,
    },
    #[error("entry at line {line} has definitions but no base form (content: {excerpt})")]
    MissingBaseForm { line: usize, excerpt: String },
    #[error("error writing output file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error loading config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl SimplifyError {
    /// Per-line errors; the run skips the line and carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SimplifyError::Parse { .. }
                | SimplifyError::Encoding { .. }
                | SimplifyError::MissingBaseForm { .. }
        )
    }
}

const EXCERPT_CHARS: usize = 120;

/// Enough of an offending line to find it again in the dump.
pub fn excerpt(line: &str) -> String {
    let mut chars = line.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
