//! Typed, fail-soft view over a [`Storage`].
//!
//! Every write to a key goes through that key's lock, so a load-modify-save
//! cycle started with [`SessionStore::modify`] never interleaves with another
//! writer of the same key.
use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};

use recruit_logging::{recruit_debug, recruit_warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::storage::Storage;

pub const JOBS_KEY: &str = "jobs";
pub const UPLOADED_CVS_KEY: &str = "uploadedCVs";
pub const AUTH_KEY: &str = "isLoggedIn";

const FLAG_SET: &str = "true";

/// Published after every successful write or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
}

struct Inner {
    storage: Arc<dyn Storage>,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    subscribers: Mutex<Vec<mpsc::Sender<StoreEvent>>>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                key_locks: Mutex::new(HashMap::new()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The collection stored under `key`; empty when absent or unparsable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.inner.storage.get_item(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                recruit_warn!("Discarding unparsable entry {key:?}: {err}");
                Vec::new()
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.write(key, items)
    }

    /// Runs one load-modify-save cycle under the key's lock.
    pub fn modify<T, R, F>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        self.cycle(key, |items| (f(items), true))
    }

    /// Like [`SessionStore::modify`], but `None` from `f` skips the write.
    pub fn modify_if<T, R, F>(&self, key: &str, f: F) -> Result<Option<R>, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> Option<R>,
    {
        self.cycle(key, |items| {
            let result = f(items);
            let write = result.is_some();
            (result, write)
        })
    }

    pub fn get_flag(&self, key: &str) -> bool {
        self.inner.storage.get_item(key).as_deref() == Some(FLAG_SET)
    }

    pub fn set_flag(&self, key: &str) {
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.inner.storage.set_item(key, FLAG_SET.to_string());
        self.publish(key);
    }

    pub fn clear(&self, key: &str) {
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.inner.storage.remove_item(key);
        self.publish(key);
    }

    /// Receives a [`StoreEvent`] for every later write through this store.
    pub fn subscribe(&self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    fn cycle<T, R, F>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> (R, bool),
    {
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.load(key);
        let (result, write) = f(&mut items);
        if write {
            self.write(key, &items)?;
        }
        Ok(result)
    }

    fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        recruit_debug!("Writing {} entries to {key:?}", items.len());
        self.inner.storage.set_item(key, raw);
        self.publish(key);
        Ok(())
    }

    fn publish(&self, key: &str) {
        let event = StoreEvent {
            key: key.to_string(),
        };
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.inner.key_locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(key.to_string()).or_default().clone()
    }
}
