use crate::merge::cancellation::Cancellation;
use cached::{Cached, TimedSizedCache};
use dto::batch::{BatchReport, BatchStatus};
use std::sync::{Arc, Mutex};

const CACHE_SIZE: usize = 100;
const CACHE_LIFESPAN: u64 = 60 * 60 * 24;

pub type SharedBatchStorage = Arc<Mutex<BatchStorage>>;

#[derive(Debug)]
pub enum BatchEntry {
    Running(Cancellation),
    Completed(BatchReport),
    Failed(String),
}

impl BatchEntry {
    pub fn status(&self) -> BatchStatus {
        match self {
            BatchEntry::Running(_) => BatchStatus::Running,
            BatchEntry::Completed(report) => BatchStatus::Completed {
                report: report.clone(),
            },
            BatchEntry::Failed(error) => BatchStatus::Failed {
                error: error.clone(),
            },
        }
    }
}

/// Batches started from the API. Only 100 batches are kept at a time,
/// and they are forgotten after one day.
#[derive(Debug)]
pub struct BatchStorage {
    batches: TimedSizedCache<String, BatchEntry>,
}

impl BatchStorage {
    pub fn store(&mut self, id: String, entry: BatchEntry) {
        self.batches.cache_set(id, entry);
    }

    pub fn get(&mut self, id: &str) -> Option<&BatchEntry> {
        self.batches.cache_get(id)
    }
}

impl Default for BatchStorage {
    fn default() -> Self {
        let batches = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, CACHE_LIFESPAN);
        Self { batches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn should_store_only_100_batches() {
        let mut storage = BatchStorage::default();
        (0..100).for_each(|id| storage.store(id.to_string(), BatchEntry::Failed(id.to_string())));
        (0..100).for_each(|id| assert!(storage.get(&id.to_string()).is_some()));
        assert_eq!(100, storage.batches.cache_size());

        storage.store("100".to_owned(), BatchEntry::Running(Cancellation::new()));

        assert_eq!(100, storage.batches.cache_size());
        assert!(storage.get("0").is_none());
    }

    #[test]
    fn should_give_batch_status() {
        let now = Local::now();
        let report = BatchReport::new("b1", now, now, vec![], false);

        assert_eq!(BatchStatus::Running, BatchEntry::Running(Cancellation::new()).status());
        assert_eq!(
            BatchStatus::Completed {
                report: report.clone()
            },
            BatchEntry::Completed(report).status()
        );
        assert_eq!(
            BatchStatus::Failed {
                error: "timeout".to_owned()
            },
            BatchEntry::Failed("timeout".to_owned()).status()
        );
    }
}
