pub mod json_store;
pub mod memory;
pub mod schema;
pub mod summary;

use std::io;

use thiserror::Error;

use crate::session::result::ResultRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write result history: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode result history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Backing storage for the result history. `load` is tolerant and returns an
/// empty history for missing or unreadable data; `save` replaces everything.
pub trait ResultRepository {
    fn load(&self) -> Vec<ResultRecord>;
    fn save(&mut self, records: &[ResultRecord]) -> Result<(), StoreError>;
}

impl<R: ResultRepository + ?Sized> ResultRepository for Box<R> {
    fn load(&self) -> Vec<ResultRecord> {
        (**self).load()
    }

    fn save(&mut self, records: &[ResultRecord]) -> Result<(), StoreError> {
        (**self).save(records)
    }
}

/// Ordered history of completed tests.
///
/// The in-memory history is authoritative for the life of the process: a
/// failed save still keeps the record, so later saves persist it.
pub struct ResultStore<R: ResultRepository> {
    repo: R,
    history: Vec<ResultRecord>,
}

impl<R: ResultRepository> ResultStore<R> {
    pub fn open(repo: R) -> Self {
        let history = repo.load();
        tracing::debug!(records = history.len(), "loaded result history");
        Self { repo, history }
    }

    pub fn append(&mut self, record: ResultRecord) -> Result<(), StoreError> {
        self.history.push(record);
        self.repo.save(&self.history).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to persist result history");
        })
    }

    pub fn history(&self) -> &[ResultRecord] {
        &self.history
    }

    /// What is currently persisted, read back from the repository.
    pub fn load_all(&self) -> Vec<ResultRecord> {
        self.repo.load()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }
}
