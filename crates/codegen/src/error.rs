//! Error types for a generation run.
//!
//! Every variant is fatal: a run either produces both output files or none.

use std::path::PathBuf;

/// All errors that can abort a generation run.
#[derive(thiserror::Error, Debug)]
pub enum CodegenError {
    /// The annotation parser met a shape it cannot normalize.
    #[error("unsupported type kind `{kind}` in `{source_text}`")]
    UnsupportedTypeKind { kind: String, source_text: String },

    /// One or more referenced records were never defined.
    #[error("unresolved type references: {}", names.join(", "))]
    DependencyUnresolved { names: Vec<String> },

    #[error("record `{0}` is defined more than once")]
    DuplicateRecord(String),

    #[error("invalid module attribute `{0}`: expected `Name = <type>`")]
    InvalidAttribute(String),

    #[error("type syntax error in `{text}` at offset {offset}: {message}")]
    Syntax {
        text: String,
        offset: usize,
        message: String,
    },

    #[error("failed to scrape documentation: {0}")]
    Scrape(String),

    #[error("invalid generator input: {0}")]
    Input(#[from] serde_json::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl CodegenError {
    pub(crate) fn unsupported(kind: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self::UnsupportedTypeKind {
            kind: kind.into(),
            source_text: source_text.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CodegenResult<T> = Result<T, CodegenError>;
