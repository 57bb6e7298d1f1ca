use std::path::PathBuf;
use std::time::Duration;

/// default address of the store server
pub const DEFAULT_ADDR: &str = "127.0.0.1:4000";
/// default bound on every store round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Where to find the store and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub addr: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            addr: DEFAULT_ADDR.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Storage engine behind the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Memory,
    Sled,
}

impl EngineKind {
    pub fn parse(name: &str) -> Option<EngineKind> {
        match name {
            "memory" => Some(EngineKind::Memory),
            "sled" => Some(EngineKind::Sled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub timeout: Duration,
    pub engine: EngineKind,
    // sled database directory
    pub path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            engine: EngineKind::Memory,
            path: PathBuf::from("."),
        }
    }
}
