use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::PipelineState;

/// Input directory or files missing. Raised before the output store is touched.
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("CSV directory `{0}` does not exist (download the dataset first)")]
    MissingDirectory(PathBuf),

    #[error("source file `{0}` does not exist")]
    MissingFile(PathBuf),
}

/// Why a single field was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationReason {
    #[error("column is missing from the source header")]
    MissingColumn,

    #[error("value is required but was null")]
    Null,

    #[error("not an integer")]
    NotAnInteger,

    #[error("not a finite number")]
    NotANumber,

    #[error("must be at least {0}")]
    BelowMinimum(i64),
}

/// A CSV record that failed schema coercion or a constraint check.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "invalid {entity} record at line {line}: field `{field}` rejected value {}: {reason}",
    display_value(.value)
)]
pub struct ValidationError {
    pub entity: &'static str,
    pub line: u64,
    pub field: &'static str,
    pub value: Option<String>,
    pub reason: ValidationReason,
}

fn display_value(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "<null>".to_string(),
    }
}

/// Failures of the output SQLite store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to remove existing store file `{path}`: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory `{path}`: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open store `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("foreign key enforcement could not be enabled")]
    ForeignKeysDisabled,

    #[error("failed to create table `{table}`: {source}")]
    CreateTable {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to insert line {line} into `{table}`: {source}")]
    Insert {
        table: &'static str,
        line: u64,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create index `{index}`: {source}")]
    CreateIndex {
        index: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("output store is not open")]
    Closed,

    #[error("{count} foreign key violation(s) found, first in table `{table}`")]
    ForeignKeyViolations { count: usize, table: String },

    #[error("store operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Failures reading or decoding one of the source CSV files.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode `{path}`: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Every way a load run can fail. None of these are recovered from.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Preflight(#[from] PreflightError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot move pipeline from {from:?} to {to:?}")]
    InvalidTransition {
        from: PipelineState,
        to: PipelineState,
    },
}

impl From<rusqlite::Error> for PipelineError {
    fn from(err: rusqlite::Error) -> Self {
        PipelineError::Store(StoreError::Sqlite(err))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
