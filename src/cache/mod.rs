use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// In-memory store mapping a job id to its generated output.
///
/// Entries live for the lifetime of the process; there is no eviction or
/// expiry. `clear` exists to reset state between test runs.
pub struct ResultCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Stores `output` under `job_id`, overwriting any previous entry.
    pub fn store(&self, job_id: &str, output: Value) -> Result<()> {
        let mut entries = self.lock()?;
        entries.insert(job_id.to_string(), output);
        debug!("Cached result for job: {}", job_id);
        Ok(())
    }

    pub fn get(&self, job_id: &str) -> Result<Option<Value>> {
        let entries = self.lock()?;
        Ok(entries.get(job_id).cloned())
    }

    pub fn clear(&self) -> Result<()> {
        let mut entries = self.lock()?;
        entries.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        let entries = self.lock()?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Value>>> {
        self.entries
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
