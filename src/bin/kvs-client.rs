use clap::{Arg, ArgAction, ArgMatches, Command};
use record_store::{
    ClientConfig, DataService, DataStoreError, HashStoreClient, Record, Result, DEFAULT_ADDR,
};
use std::process;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("kvs-client")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Save and find records in a kvs-server")
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .arg(
            Arg::new("addr")
                .long("addr")
                .value_name("IP:PORT")
                .help("Address of the store")
                .global(true)
                .default_value(DEFAULT_ADDR),
        )
        .arg(
            Arg::new("timeout-ms")
                .long("timeout-ms")
                .value_name("MILLIS")
                .help("Bound on every store round trip")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("3000"),
        )
        .subcommand(
            Command::new("put")
                .about("Save a record")
                .arg(Arg::new("KEY").help("Record key").required(true))
                .arg(
                    Arg::new("FIELD")
                        .help("Extra field as NAME=VALUE")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the record stored under a key")
                .arg(Arg::new("KEY").help("Record key").required(true)),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = ClientConfig::default();
    if let Some(addr) = matches.get_one::<String>("addr") {
        config.addr = addr.to_owned();
    }
    if let Some(millis) = matches.get_one::<u64>("timeout-ms") {
        config.timeout = Duration::from_millis(*millis);
    }
    let service = DataService::new(HashStoreClient::new(&config)?);

    match matches.subcommand() {
        Some(("put", args)) => {
            let key = required(args, "KEY")?;
            let mut record = Record::new(key);
            for field in args.get_many::<String>("FIELD").into_iter().flatten() {
                let (name, value) = field.split_once('=').ok_or_else(|| {
                    DataStoreError::Other(format!("field `{}` is not NAME=VALUE", field))
                })?;
                record = record.with_field(name, value);
            }
            service.save(&record)
        }
        Some(("get", args)) => {
            let key = required(args, "KEY")?;
            match service.find(key)? {
                Some(record) => println!("{}", serde_json::to_string(&record)?),
                None => println!("Key not found"),
            }
            Ok(())
        }
        _ => Err(DataStoreError::Other("unknown command".to_owned())),
    }
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| DataStoreError::Other(format!("missing {}", name)))
}
