use clap::{Arg, Command};
use log::{error, info};
use record_store::{
    DataStoreError, EngineKind, MemoryHashStore, Result, Server, ServerConfig, SledHashStore,
    DEFAULT_ADDR,
};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("kvs-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Serve a hash-map key-value store over TCP")
        .arg(
            Arg::new("addr")
                .long("addr")
                .value_name("IP:PORT")
                .help("Address to listen on")
                .default_value(DEFAULT_ADDR),
        )
        .arg(
            Arg::new("engine")
                .long("engine")
                .value_name("ENGINE-NAME")
                .help("Storage engine")
                .value_parser(["memory", "sled"])
                .default_value("memory"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("DIR")
                .help("Directory of the sled database")
                .default_value("."),
        )
        .arg(
            Arg::new("timeout-ms")
                .long("timeout-ms")
                .value_name("MILLIS")
                .help("Read and write timeout per connection")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("3000"),
        )
        .get_matches();

    let mut config = ServerConfig::default();
    if let Some(addr) = matches.get_one::<String>("addr") {
        config.addr = addr.to_owned();
    }
    if let Some(engine) = matches.get_one::<String>("engine").and_then(|e| EngineKind::parse(e)) {
        config.engine = engine;
    }
    if let Some(path) = matches.get_one::<String>("path") {
        config.path = PathBuf::from(path);
    }
    if let Some(millis) = matches.get_one::<u64>("timeout-ms") {
        config.timeout = Duration::from_millis(*millis);
    }

    if let Err(err) = run(config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(config: ServerConfig) -> Result<()> {
    info!("kvs-server {}", env!("CARGO_PKG_VERSION"));
    info!("Storage engine: {:?}", config.engine);
    match config.engine {
        EngineKind::Memory => Server::new(MemoryHashStore::new())
            .with_timeout(config.timeout)
            .start(&config.addr),
        EngineKind::Sled => {
            let db = sled::open(&config.path).map_err(DataStoreError::from)?;
            Server::new(SledHashStore::open(db))
                .with_timeout(config.timeout)
                .start(&config.addr)
        }
    }
}
