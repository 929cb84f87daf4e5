//! Saved-job bookkeeping.
//!
//! The saved set is an ordered list of job ids with no duplicates,
//! persisted as a JSON array under a fixed storage key. Every mutation
//! writes through; a failed write is logged and the in-memory set stays
//! authoritative until the process exits.

use std::sync::{Arc, Mutex};

use tracing::error;

use crate::storage::KeyValueStorage;

pub const SAVED_JOBS_STORAGE_KEY: &str = "SAVED_JOBS";

pub struct SavedJobsStore {
    storage: Arc<dyn KeyValueStorage>,
    ids: Mutex<Vec<String>>,
}

impl SavedJobsStore {
    /// Creates an empty store. Call [`load`](Self::load) to pick up the
    /// persisted set.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            ids: Mutex::new(Vec::new()),
        }
    }

    /// Loads the persisted set. An absent key yields the empty set;
    /// a storage failure or malformed content is logged and the set is
    /// left empty.
    pub fn load(&self) {
        match self.storage.get(SAVED_JOBS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => *self.ids.lock().unwrap() = ids,
                Err(err) => error!("Malformed saved jobs entry, starting empty: {}", err),
            },
            Ok(None) => {}
            Err(err) => error!("Failed to load saved jobs: {:#}", err),
        }
    }

    /// Removes `id` if it is saved, appends it otherwise, then writes the
    /// set through to storage. Returns whether the id is saved afterwards.
    pub fn toggle(&self, id: &str) -> bool {
        let mut ids = self.ids.lock().unwrap();
        let now_saved = match ids.iter().position(|existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };
        self.persist(&ids);
        now_saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.lock().unwrap().iter().any(|saved| saved == id)
    }

    /// The saved ids in the order they were first saved.
    pub fn ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }

    fn persist(&self, ids: &[String]) {
        let encoded = match serde_json::to_string(ids) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("Failed to encode saved job ids: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(SAVED_JOBS_STORAGE_KEY, &encoded) {
            error!("Failed to persist saved jobs, keeping in-memory set: {:#}", err);
        }
    }
}
