pub mod json_backend;
pub mod memory;
pub mod wire;

use std::sync::Arc;

use crate::errors::PersistenceError;

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
pub use wire::{StoredBill, WireAmount};

/// Key holding the serialized bill array.
pub const BILLS_KEY: &str = "bills";
/// Key holding the UI theme preference.
pub const THEME_KEY: &str = "theme";

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// String key-value storage, the shape of local device storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Persistence capability injected into the ledger store.
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<StoredBill>>>;
    fn save(&self, bills: &[StoredBill]) -> Result<()>;
}

/// Stores the bill array as JSON under [`BILLS_KEY`].
#[derive(Debug, Clone)]
pub struct KeyValueBackend<K> {
    store: K,
}

impl<K: KeyValueStore> KeyValueBackend<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> StorageBackend for KeyValueBackend<K> {
    fn load(&self) -> Result<Option<Vec<StoredBill>>> {
        match self.store.get(BILLS_KEY)? {
            Some(raw) => {
                let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
                Ok(Some(entries.into_iter().enumerate().map(decode_entry).collect()))
            }
            None => Ok(None),
        }
    }

    fn save(&self, bills: &[StoredBill]) -> Result<()> {
        let json = serde_json::to_string(bills)?;
        self.store.set(BILLS_KEY, &json)
    }
}

/// An element that is not a bill object decodes as an empty bill, which validation skips.
fn decode_entry((position, value): (usize, serde_json::Value)) -> StoredBill {
    serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(position, error = %err, "stored bill is not an object");
        StoredBill::default()
    })
}
