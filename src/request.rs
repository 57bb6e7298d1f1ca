use serde::{Deserialize, Serialize};

/// Request sent from client to server, one per connection
#[derive(Debug, Serialize, Deserialize)]
pub enum Request {
    HGet {
        collection: String,
        key: String,
    },
    HSet {
        collection: String,
        key: String,
        value: Vec<u8>,
    },
}
