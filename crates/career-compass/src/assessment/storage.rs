use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Keys under which the assessment flow persists its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    AssessmentAnswers,
    AssessmentResult,
    MbtiResult,
}

impl StorageKey {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::AssessmentAnswers,
            Self::AssessmentResult,
            Self::MbtiResult,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssessmentAnswers => "career_assessment_answers",
            Self::AssessmentResult => "career_assessment_result",
            Self::MbtiResult => "mbti_result",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("stored value for '{key}' is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode value for '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value persistence, the server-side stand-in for browser local
/// storage. Values are JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
    fn set_raw(&self, key: StorageKey, value: String) -> Result<(), StorageError>;
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;

    fn load<T>(&self, key: StorageKey) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|source| {
            warn!(
                key = key.as_str(),
                error = %source,
                "stored value could not be parsed"
            );
            StorageError::Corrupt {
                key: key.as_str(),
                source,
            }
        })
    }

    fn save<T>(&self, key: StorageKey, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
        T: Serialize,
    {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.as_str(),
            source,
        })?;
        self.set_raw(key, raw)
    }
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn get_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

fn poisoned() -> StorageError {
    StorageError::Unavailable("store mutex poisoned".to_string())
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl KeyValueStore for InMemoryStore {
    fn get_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let guard = self.entries.lock().map_err(|_| poisoned())?;
        Ok(guard.get(&key).cloned())
    }

    fn set_raw(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        let mut guard = self.entries.lock().map_err(|_| poisoned())?;
        guard.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let mut guard = self.entries.lock().map_err(|_| poisoned())?;
        guard.remove(&key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.entries.lock().map_err(|_| poisoned())?;
        guard.clear();
        Ok(())
    }
}

/// One `<key>.json` file per entry under a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&path, err)),
        }
    }

    fn set_raw(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        fs::create_dir_all(&self.root).map_err(|err| io_error(&self.root, err))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|err| io_error(&path, err))
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path, err)),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        for key in StorageKey::ordered() {
            self.remove(key)?;
        }
        Ok(())
    }
}
