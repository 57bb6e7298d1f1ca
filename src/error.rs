use failure::Fail;
use std::io;

#[derive(Fail, Debug)]
pub enum DataStoreError {
    // Record cannot be represented in the encoding
    #[fail(display = "encoding error: {}", _0)]
    Encoding(String),
    // Stored bytes are not a valid record
    #[fail(display = "decoding error: {}", _0)]
    Decoding(String),
    // Store could not be reached or did not answer in time
    #[fail(display = "store unavailable: {}", _0)]
    StoreUnavailable(#[cause] io::Error),
    // Store answered with a failure
    #[fail(display = "store error: {}", _0)]
    Store(String),
    // Empty key passed by the caller
    #[fail(display = "key must not be empty")]
    EmptyKey,
    // IO error
    #[fail(display = "IO error: {}", _0)]
    Io(#[cause] io::Error),
    // Malformed protocol message
    #[fail(display = "serde_json error: {}", _0)]
    Serde(#[cause] serde_json::Error),
    // Sled DB error
    #[fail(display = "sled error: {}", _0)]
    Sled(#[cause] sled::Error),
    // Other message in String
    #[fail(display = "{}", _0)]
    Other(String),
}

impl From<io::Error> for DataStoreError {
    fn from(err: io::Error) -> Self {
        DataStoreError::Io(err)
    }
}

impl From<serde_json::Error> for DataStoreError {
    fn from(err: serde_json::Error) -> Self {
        DataStoreError::Serde(err)
    }
}

impl From<sled::Error> for DataStoreError {
    fn from(err: sled::Error) -> Self {
        DataStoreError::Sled(err)
    }
}

pub type Result<T> = std::result::Result<T, DataStoreError>;
