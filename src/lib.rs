#![cfg_attr(not(test), no_std)]

pub mod codegen;
pub mod config;
pub mod constants;
pub mod record;
pub mod validate;

pub use config::{Config, Security, CONFIG};
pub use record::NodeConfig;
pub use validate::{BrokerAddress, Error, Field};
