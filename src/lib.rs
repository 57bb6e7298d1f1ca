mod client;
pub use client::*;
mod codec;
pub use codec::*;
mod config;
pub use config::*;
mod deadline;
mod error;
pub use error::*;
mod record;
pub use record::*;
mod request;
pub use request::*;
mod response;
pub use response::*;
mod server;
pub use server::*;
mod service;
pub use service::*;

mod engines;
pub use engines::*;
