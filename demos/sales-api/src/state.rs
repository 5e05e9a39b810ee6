use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sales_lab::Dataset;

use crate::error::AppError;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Generated datasets keyed by session id. Each client works against its
    /// own snapshot instead of a single process-wide "current" dataset.
    pub sessions: Mutex<SessionStore>,

    /// Upper bound on `num_records` for a single generate request.
    pub max_records: usize,
}

impl AppState {
    pub fn new(max_records: usize, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(SessionStore::new(max_sessions)),
            max_records,
        }
    }

    /// Look up a session's dataset, mapping a poisoned lock to a 500 and a
    /// missing id to a 404.
    pub fn dataset(&self, session: &str) -> Result<Arc<Dataset>, AppError> {
        self.sessions
            .lock()
            .map_err(|_| AppError::internal("Session lock poisoned"))?
            .get(session)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No dataset for session '{session}'; call /api/generate_data first"
                ))
            })
    }
}

struct Entry {
    dataset: Arc<Dataset>,
    /// Insertion order, used to pick the eviction victim.
    seq: u64,
}

/// Bounded map of session id to dataset snapshot.
///
/// When full, inserting evicts the oldest session.
pub struct SessionStore {
    entries: HashMap<String, Entry>,
    capacity: usize,
    next_seq: u64,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    /// Store `dataset` under a fresh random id and return the id.
    pub fn insert(&mut self, dataset: Dataset) -> String {
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        let id = loop {
            let candidate = format!("{:032x}", rand::random::<u128>());
            if !self.entries.contains_key(&candidate) {
                break candidate;
            }
        };
        self.entries.insert(
            id.clone(),
            Entry {
                dataset: Arc::new(dataset),
                seq: self.next_seq,
            },
        );
        self.next_seq += 1;
        id
    }

    pub fn get(&self, id: &str) -> Option<Arc<Dataset>> {
        self.entries.get(id).map(|e| Arc::clone(&e.dataset))
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.seq)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            self.entries.remove(&id);
            tracing::debug!(session = %id, "evicted oldest session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(seed: u64) -> Dataset {
        sales_lab::generate(5, seed).unwrap()
    }

    #[test]
    fn insert_then_get_returns_same_snapshot() {
        let mut store = SessionStore::new(4);
        let id = store.insert(dataset(1));
        assert_eq!(id.len(), 32);
        assert_eq!(*store.get(&id).unwrap(), dataset(1));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn sessions_are_independent() {
        let mut store = SessionStore::new(4);
        let a = store.insert(dataset(1));
        let b = store.insert(dataset(2));
        assert_ne!(a, b);
        assert_eq!(store.get(&a).unwrap().seed(), Some(1));
        assert_eq!(store.get(&b).unwrap().seed(), Some(2));
    }

    #[test]
    fn full_store_evicts_oldest() {
        let mut store = SessionStore::new(2);
        let first = store.insert(dataset(1));
        let second = store.insert(dataset(2));
        let third = store.insert(dataset(3));
        assert_eq!(store.len(), 2);
        assert!(store.get(&first).is_none());
        assert!(store.get(&second).is_some());
        assert!(store.get(&third).is_some());
    }

    #[test]
    fn remove_reports_presence() {
        let mut store = SessionStore::new(2);
        let id = store.insert(dataset(1));
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
    }

    #[test]
    fn app_state_missing_session_is_not_found() {
        let state = AppState::new(10, 2);
        let err = state.dataset("nope").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }
}
