//! This is implementation of HashStore kept in process memory

use super::HashStore;
use crate::error::{DataStoreError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Collections = HashMap<String, HashMap<String, Vec<u8>>>;

/// In-memory store, clones share the same data
#[derive(Clone, Default)]
pub struct MemoryHashStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryHashStore {
    pub fn new() -> Self {
        MemoryHashStore::default()
    }
}

fn poisoned<T>(_: T) -> DataStoreError {
    DataStoreError::Other("memory store lock poisoned".to_owned())
}

impl HashStore for MemoryHashStore {
    fn hset(&self, collection: &str, key: &str, value: Vec<u8>) -> Result<()> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
        Ok(())
    }

    fn hget(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|entries| entries.get(key))
            .cloned())
    }
}
