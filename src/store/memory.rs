use std::io;

use crate::session::result::ResultRecord;
use crate::store::schema;
use crate::store::{ResultRepository, StoreError};

/// In-memory repository holding the encoded history document, for tests and
/// for running without a writable data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw document, as if read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ResultRepository for MemoryStore {
    fn load(&self) -> Vec<ResultRecord> {
        self.document
            .as_deref()
            .map(schema::decode_history)
            .unwrap_or_default()
    }

    fn save(&mut self, records: &[ResultRecord]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "storage is full").into());
        }
        self.document = Some(schema::encode_history(records)?);
        self.writes += 1;
        Ok(())
    }
}
