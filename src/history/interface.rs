use crate::history::record::DisposalRecord;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file {} is malformed: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("failed to read history file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write history file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub trait HistoryStore: Send + Sync {
    fn append(&self, record: &DisposalRecord) -> Result<(), HistoryError>;

    /// `None` when there is no history yet.
    fn read_all(&self) -> Result<Option<Vec<DisposalRecord>>, HistoryError>;

    /// Removes every record at once. Clearing an absent history succeeds.
    fn clear(&self) -> Result<(), HistoryError>;
}
