use log::debug;
use serde::Deserialize;
use serde_json::Deserializer;

use crate::deadline::DeadlineStream;
use crate::ClientConfig;
use crate::DataStoreError;
use crate::HashStore;
use crate::Request;
use crate::Response;
use crate::Result;
use std::io::{self, BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// Client of a remote `Server`.
///
/// Every call opens its own connection, so a single client can be cloned or
/// shared across threads freely. The whole round trip, from connecting to
/// receiving the response, is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HashStoreClient {
    addr: SocketAddr,
    timeout: Duration,
}

impl HashStoreClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let addr = config
            .addr
            .to_socket_addrs()
            .map_err(DataStoreError::StoreUnavailable)?
            .next()
            .ok_or_else(|| {
                DataStoreError::StoreUnavailable(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no address for {}", config.addr),
                ))
            })?;
        Ok(HashStoreClient {
            addr,
            timeout: config.timeout,
        })
    }

    fn send(&self, request: &Request) -> Result<Option<Vec<u8>>> {
        debug!("Sending to {}: {:?}", self.addr, request);
        let deadline = Instant::now() + self.timeout;
        let stream = TcpStream::connect_timeout(&self.addr, self.timeout)
            .map_err(DataStoreError::StoreUnavailable)?;

        let mut writer = BufWriter::new(DeadlineStream::new(&stream, deadline));
        serde_json::to_writer(&mut writer, request).map_err(wire_error)?;
        writer.flush().map_err(DataStoreError::StoreUnavailable)?;

        let reader = BufReader::new(DeadlineStream::new(&stream, deadline));
        let response =
            Response::deserialize(&mut Deserializer::from_reader(reader)).map_err(wire_error)?;
        match response {
            Response::Ok(value) => Ok(value),
            Response::Err(msg) => Err(DataStoreError::Store(msg)),
        }
    }
}

// a broken or silent connection means the store is unavailable
fn wire_error(err: serde_json::Error) -> DataStoreError {
    if err.is_io() || err.is_eof() {
        DataStoreError::StoreUnavailable(err.into())
    } else {
        DataStoreError::Serde(err)
    }
}

impl HashStore for HashStoreClient {
    fn hset(&self, collection: &str, key: &str, value: Vec<u8>) -> Result<()> {
        self.send(&Request::HSet {
            collection: collection.to_owned(),
            key: key.to_owned(),
            value,
        })
        .map(|_| ())
    }

    fn hget(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        self.send(&Request::HGet {
            collection: collection.to_owned(),
            key: key.to_owned(),
        })
    }
}
