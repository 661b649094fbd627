use std::sync::Arc;
use std::thread;
use std::time::Duration;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::OptionKey;
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::session::AssessmentSession;
use crate::assessment::storage::{InMemoryStore, KeyValueStore, StorageError, StorageKey};

pub(super) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn memory_session() -> (Arc<InMemoryStore>, Arc<AssessmentSession<InMemoryStore>>) {
    let store = Arc::new(InMemoryStore::default());
    let session = AssessmentSession::new(store.clone(), AssessmentEngine::standard());
    (store, Arc::new(session))
}

pub(super) fn answer_everything(session: &AssessmentSession<InMemoryStore>, option: OptionKey) {
    for (question_id, chosen) in AnswerSet::uniform(option).iter() {
        session
            .record(question_id, chosen)
            .expect("catalog answers are valid");
    }
}

/// Store that refuses every operation, for exercising failure paths.
pub(super) struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_raw(&self, _key: StorageKey) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }

    fn set_raw(&self, _key: StorageKey, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }

    fn remove(&self, _key: StorageKey) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }
}

pub(super) const SLOW_STORE_DELAY: Duration = Duration::from_millis(100);

/// In-memory store whose reads stall, widening the window between a session's
/// load and its save.
#[derive(Default)]
pub(super) struct SlowStore {
    inner: InMemoryStore,
}

impl KeyValueStore for SlowStore {
    fn get_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let value = self.inner.get_raw(key);
        thread::sleep(SLOW_STORE_DELAY);
        value
    }

    fn set_raw(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.inner.set_raw(key, value)
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
