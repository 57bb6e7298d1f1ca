use log::{debug, error, info};
use serde::Deserialize;
use serde_json::Deserializer;

use crate::deadline::DeadlineStream;
use crate::HashStore;
use crate::Request;
use crate::Response;
use crate::Result;
use crate::DEFAULT_TIMEOUT;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::net::TcpStream;
use std::net::{TcpListener, ToSocketAddrs};
use std::thread;
use std::time::{Duration, Instant};

pub struct Server<E: HashStore> {
    pub engine: E,
    timeout: Duration,
}

impl<E: HashStore> Server<E> {
    /// `new` create a server
    pub fn new(engine: E) -> Self {
        Server {
            engine,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// bound on the whole exchange with one connection, request and response
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn start<A: ToSocketAddrs>(self, addr: A) -> Result<()> {
        let listener = TcpListener::bind(addr)?;
        self.run(listener)
    }

    /// serve connections accepted on `listener` until it fails
    pub fn run(self, listener: TcpListener) -> Result<()> {
        info!("Listening on {}", listener.local_addr()?);
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let engine = self.engine.clone();
                    let timeout = self.timeout;
                    thread::spawn(move || {
                        if let Err(err) = serve(&engine, stream, timeout) {
                            error!("Error on serving client: {}", err)
                        }
                    });
                }
                Err(err) => error!("Connection failed: {}", err),
            }
        }
        Ok(())
    }
}

fn serve<E: HashStore>(engine: &E, stream: TcpStream, timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    let peer = stream.peer_addr()?;
    let reader = BufReader::new(DeadlineStream::new(&stream, deadline));
    let mut writer = BufWriter::new(DeadlineStream::new(&stream, deadline));
    let request = Request::deserialize(&mut Deserializer::from_reader(reader))?;
    debug!("Request from {}: {:?}", peer, request);

    let response = match request {
        Request::HGet { collection, key } => match engine.hget(&collection, &key) {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Err(format!("{}", err)),
        },
        Request::HSet {
            collection,
            key,
            value,
        } => match engine.hset(&collection, &key, value) {
            Ok(_) => Response::Ok(None),
            Err(err) => Response::Err(format!("{}", err)),
        },
    };
    serde_json::to_writer(&mut writer, &response)?;
    writer.flush()?;
    Ok(())
}
