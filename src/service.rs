use log::debug;

use crate::{DataStoreError, HashStore, JsonCodec, Record, RecordCodec, Result};

/// Collection every record is stored under
pub const COLLECTION: &str = "data";

/// Saves and finds records in a `HashStore`, encoded with a `RecordCodec`.
///
/// Each call is a single round trip to the store. Writes to the same key are
/// last-write-wins; nothing is retried.
pub struct DataService<S, C = JsonCodec> {
    store: S,
    codec: C,
}

impl<S: HashStore> DataService<S> {
    pub fn new(store: S) -> Self {
        DataService::with_codec(store, JsonCodec)
    }
}

impl<S: HashStore, C: RecordCodec> DataService<S, C> {
    pub fn with_codec(store: S, codec: C) -> Self {
        DataService { store, codec }
    }

    /// save `record` under its key, overwriting any previous record
    pub fn save(&self, record: &Record) -> Result<()> {
        if record.key().is_empty() {
            return Err(DataStoreError::EmptyKey);
        }
        let bytes = self.codec.encode(record)?;
        debug!("Saving {} ({} bytes)", record.key(), bytes.len());
        self.store.hset(COLLECTION, record.key(), bytes)
    }

    /// find the record stored under `key`
    ///
    /// return None if no record exists for the key
    pub fn find(&self, key: &str) -> Result<Option<Record>> {
        if key.is_empty() {
            return Err(DataStoreError::EmptyKey);
        }
        let bytes = match self.store.hget(COLLECTION, key)? {
            Some(bytes) => bytes,
            None => {
                debug!("No record for {}", key);
                return Ok(None);
            }
        };
        let record = self.codec.decode(&bytes)?;
        if record.key() != key {
            return Err(DataStoreError::Decoding(format!(
                "record stored under {} has key {}",
                key,
                record.key()
            )));
        }
        Ok(Some(record))
    }
}
