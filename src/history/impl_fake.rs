use crate::history::interface::{HistoryError, HistoryStore};
use crate::history::record::DisposalRecord;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct HistoryStoreFake {
    records: Mutex<Option<Vec<DisposalRecord>>>,
    fail_writes: AtomicBool,
    malformed: AtomicBool,
}

impl HistoryStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_malformed(&self, malformed: bool) {
        self.malformed.store(malformed, Ordering::SeqCst);
    }

    fn path() -> PathBuf {
        PathBuf::from("memory")
    }

    fn records(&self) -> std::sync::MutexGuard<'_, Option<Vec<DisposalRecord>>> {
        match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl HistoryStore for HistoryStoreFake {
    fn append(&self, record: &DisposalRecord) -> Result<(), HistoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HistoryError::Write {
                path: Self::path(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        self.records()
            .get_or_insert_with(Vec::new)
            .push(record.clone());

        Ok(())
    }

    fn read_all(&self) -> Result<Option<Vec<DisposalRecord>>, HistoryError> {
        if self.malformed.load(Ordering::SeqCst) {
            return Err(HistoryError::Malformed {
                path: Self::path(),
                reason: "unequal lengths".to_string(),
            });
        }

        Ok(self.records().clone())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        *self.records() = None;
        self.malformed.store(false, Ordering::SeqCst);
        Ok(())
    }
}
