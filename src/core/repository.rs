use crate::core::store::{LoadReport, Store};
use crate::domain::ports::RecordStorage;
use crate::utils::error::Result;

/// Bulk load and save of a [`Store`] through a [`RecordStorage`].
pub struct Repository<S: RecordStorage> {
    storage: S,
}

impl<S: RecordStorage> Repository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load_from_source(&self) -> Result<Vec<Vec<u8>>> {
        self.storage.read_lines()
    }

    pub fn save_to_sink(&self, lines: &[String]) -> Result<()> {
        self.storage.write_lines(lines)
    }

    /// Builds the startup store. An unreadable source leaves the store empty
    /// and is recorded in the report.
    pub fn open(&self, capacity: usize) -> (Store, LoadReport) {
        match self.load_from_source() {
            Ok(lines) => Store::load(capacity, lines),
            Err(e) => {
                tracing::warn!("Could not read boat data, starting empty: {}", e);
                let report = LoadReport {
                    source_error: Some(e),
                    ..LoadReport::default()
                };
                (Store::with_capacity(capacity), report)
            }
        }
    }

    /// Writes every record in insertion order and returns how many were written.
    pub fn persist(&self, store: &Store) -> Result<usize> {
        let lines = store.serialize_all();
        self.save_to_sink(&lines)?;
        tracing::info!("Saved {} boats", lines.len());
        Ok(lines.len())
    }
}
