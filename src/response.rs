use serde::{Deserialize, Serialize};

/// Server answer, `Ok(None)` for a miss or a completed `HSet`
#[derive(Debug, Serialize, Deserialize)]
pub enum Response {
    Ok(Option<Vec<u8>>),
    Err(String),
}
