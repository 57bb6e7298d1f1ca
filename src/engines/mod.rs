use crate::Result;

/// A hash-map store: byte values addressed by `(collection, key)`.
///
/// Handles are cheap to clone and safe to share between threads.
pub trait HashStore: Clone + Send + Sync + 'static {
    /// set value of `key` in `collection`
    ///
    /// if key exists, overwrite the value
    fn hset(&self, collection: &str, key: &str, value: Vec<u8>) -> Result<()>;

    /// get value of `key` in `collection`
    ///
    /// return None if the key does not exists
    fn hget(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>>;
}

mod memory;
mod sled_engine;

pub use self::memory::MemoryHashStore;
pub use self::sled_engine::SledHashStore;
