use crate::history::interface::{HistoryError, HistoryStore};
use crate::history::record::{DisposalRecord, HEADER};
use crate::library::logger::interface::Logger;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Append-only comma separated file with a header row.
pub struct HistoryStoreCsv {
    path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl HistoryStoreCsv {
    pub fn new(path: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path: path.into(),
            logger: logger.with_namespace("history").with_namespace("csv"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> HistoryError {
        HistoryError::Malformed {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn read_error(&self, error: csv::Error) -> HistoryError {
        if error.is_io_error() {
            HistoryError::Read {
                path: self.path.clone(),
                source: error.into(),
            }
        } else {
            self.malformed(error.to_string())
        }
    }
}

impl HistoryStore for HistoryStoreCsv {
    fn append(&self, record: &DisposalRecord) -> Result<(), HistoryError> {
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(self.write_error(e)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(HEADER)
                .map_err(|e| self.write_error(e.into()))?;
        }

        writer
            .serialize(record)
            .map_err(|e| self.write_error(e.into()))?;

        writer.flush().map_err(|e| self.write_error(e))?;

        let _ = self.logger.info(&format!("Appended {:?}", record));

        Ok(())
    }

    fn read_all(&self) -> Result<Option<Vec<DisposalRecord>>, HistoryError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // zero bytes is the only state append treats as headerless
        let len = file
            .metadata()
            .map_err(|source| HistoryError::Read {
                path: self.path.clone(),
                source,
            })?
            .len();
        if len == 0 {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| self.read_error(e))?;
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(self.malformed(format!(
                "expected header {:?}, found {:?}",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let records = reader
            .deserialize::<DisposalRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.read_error(e))?;

        Ok(Some(records))
    }

    fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                let _ = self.logger.info("History cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        }
    }
}
