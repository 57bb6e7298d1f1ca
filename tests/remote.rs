use record_store::{
    ClientConfig, DataService, DataStoreError, HashStore, HashStoreClient, MemoryHashStore, Record,
    Result, Server, COLLECTION,
};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

// Start a memory-backed server on a free port and return a client for it
fn spawn_server() -> HashStoreClient {
    spawn_server_with(MemoryHashStore::new())
}

fn spawn_server_with<E: HashStore>(engine: E) -> HashStoreClient {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || Server::new(engine).run(listener));
    HashStoreClient::new(&ClientConfig {
        addr: addr.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[test]
fn remote_save_then_find() {
    let service = DataService::new(spawn_server());
    let alice = Record::new("user:1").with_field("value", "Alice");
    service.save(&alice).unwrap();

    assert_eq!(service.find("user:1").unwrap(), Some(alice));
    assert_eq!(service.find("user:2").unwrap(), None);
}

#[test]
fn remote_overwrite() {
    let service = DataService::new(spawn_server());
    service
        .save(&Record::new("user:1").with_field("value", "Alice"))
        .unwrap();
    let bob = Record::new("user:1").with_field("value", "Bob");
    service.save(&bob).unwrap();

    assert_eq!(service.find("user:1").unwrap(), Some(bob));
}

#[test]
fn remote_corrupted_value() {
    let client = spawn_server();
    client
        .hset(COLLECTION, "user:1", b"{broken".to_vec())
        .unwrap();
    let service = DataService::new(client);

    assert!(matches!(
        service.find("user:1"),
        Err(DataStoreError::Decoding(_))
    ));
}

#[test]
fn clients_share_one_server_across_threads() {
    let client = spawn_server();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = DataService::new(client.clone());
            thread::spawn(move || {
                let record = Record::new(format!("user:{}", i)).with_field("n", i);
                service.save(&record).unwrap();
                assert_eq!(service.find(record.key()).unwrap(), Some(record));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn closed_port_is_store_unavailable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = HashStoreClient::new(&ClientConfig {
        addr: addr.to_string(),
        timeout: Duration::from_secs(1),
    })
    .unwrap();
    let service = DataService::new(client);

    assert!(matches!(
        service.find("user:1"),
        Err(DataStoreError::StoreUnavailable(_))
    ));
    assert!(matches!(
        service.save(&Record::new("user:1")),
        Err(DataStoreError::StoreUnavailable(_))
    ));
}

// A store that accepts connections but never answers times out
#[test]
fn silent_store_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let client = HashStoreClient::new(&ClientConfig {
        addr: listener.local_addr().unwrap().to_string(),
        timeout: Duration::from_millis(200),
    })
    .unwrap();
    let service = DataService::new(client);

    let started = Instant::now();
    assert!(matches!(
        service.find("user:1"),
        Err(DataStoreError::StoreUnavailable(_))
    ));
    assert!(started.elapsed() < Duration::from_secs(5));
    drop(listener);
}

// Engine that fails every operation
#[derive(Clone)]
struct BrokenStore;

impl HashStore for BrokenStore {
    fn hset(&self, _collection: &str, _key: &str, _value: Vec<u8>) -> Result<()> {
        Err(DataStoreError::Other("disk full".to_owned()))
    }

    fn hget(&self, _collection: &str, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(DataStoreError::Other("disk full".to_owned()))
    }
}

#[test]
fn engine_failure_is_store_error() {
    let service = DataService::new(spawn_server_with(BrokenStore));

    match service.save(&Record::new("user:1")) {
        Err(DataStoreError::Store(msg)) => assert_eq!(msg, "disk full"),
        other => panic!("expected store error, got {:?}", other),
    }
    match service.find("user:1") {
        Err(DataStoreError::Store(msg)) => assert_eq!(msg, "disk full"),
        other => panic!("expected store error, got {:?}", other),
    }
}

// A store trickling its response keeps each read short but must still
// fail once the whole call runs past the timeout
#[test]
fn trickling_store_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        if stream.write_all(br#"{"Ok":["#).is_err() {
            return;
        }
        for _ in 0..60 {
            thread::sleep(Duration::from_millis(100));
            if stream.write_all(b"1,").is_err() {
                return;
            }
        }
    });
    let client = HashStoreClient::new(&ClientConfig {
        addr: addr.to_string(),
        timeout: Duration::from_millis(300),
    })
    .unwrap();
    let service = DataService::new(client);

    let started = Instant::now();
    assert!(matches!(
        service.find("user:1"),
        Err(DataStoreError::StoreUnavailable(_))
    ));
    assert!(started.elapsed() < Duration::from_secs(2));
}

// The server drops a connection whose request trickles in past its timeout
#[test]
fn server_drops_trickling_client() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        Server::new(MemoryHashStore::new())
            .with_timeout(Duration::from_millis(300))
            .run(listener)
    });

    let mut stream = TcpStream::connect(addr).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let started = Instant::now();
    stream.write_all(br#"{"HGet":"#).unwrap();
    while started.elapsed() < Duration::from_secs(5) {
        thread::sleep(Duration::from_millis(100));
        if stream.write_all(b" ").is_err() {
            break;
        }
    }
    let mut buf = Vec::new();
    let _ = stream.read_to_end(&mut buf);

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(buf.is_empty());
}
