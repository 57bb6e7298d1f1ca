use crate::error::{DataStoreError, Result};
use crate::record::{Record, KEY_FIELD};

/// Conversion between a `Record` and the bytes kept in the store
pub trait RecordCodec: Send + Sync {
    /// encode a record
    ///
    /// return DataStoreError::Encoding if the record cannot be represented
    fn encode(&self, record: &Record) -> Result<Vec<u8>>;

    /// decode bytes produced by `encode`
    ///
    /// return DataStoreError::Decoding if the bytes are empty, malformed or lack a key
    fn decode(&self, bytes: &[u8]) -> Result<Record>;
}

/// Encodes records as a JSON object: `key` first, other fields in name order.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        if record.key().is_empty() {
            return Err(DataStoreError::Encoding("record key is empty".to_owned()));
        }
        if record.fields().contains_key(KEY_FIELD) {
            return Err(DataStoreError::Encoding(format!(
                "field name `{}` is reserved for the record key",
                KEY_FIELD
            )));
        }
        serde_json::to_vec(record).map_err(|err| DataStoreError::Encoding(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        if bytes.is_empty() {
            return Err(DataStoreError::Decoding("empty input".to_owned()));
        }
        let record: Record = serde_json::from_slice(bytes)
            .map_err(|err| DataStoreError::Decoding(err.to_string()))?;
        if record.key().is_empty() {
            return Err(DataStoreError::Decoding("record key is empty".to_owned()));
        }
        Ok(record)
    }
}
