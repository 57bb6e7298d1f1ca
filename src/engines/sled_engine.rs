//! This is implementation of HashStore by sled DB, one tree per collection

use super::HashStore;
use crate::error::Result;
use sled::Db;

#[derive(Clone)]
pub struct SledHashStore(Db);

impl SledHashStore {
    pub fn open(db: Db) -> Self {
        SledHashStore(db)
    }
}

impl HashStore for SledHashStore {
    fn hset(&self, collection: &str, key: &str, value: Vec<u8>) -> Result<()> {
        let tree = self.0.open_tree(collection)?;
        tree.insert(key, value).map(|_| ())?;
        tree.flush()?;
        Ok(())
    }

    fn hget(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let tree = self.0.open_tree(collection)?;
        Ok(tree
            .get(key)?
            .map(|i_vec| AsRef::<[u8]>::as_ref(&i_vec).to_vec()))
    }
}
