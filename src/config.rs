use core::str::FromStr;

use heapless::String;
use log::info;

use crate::constants::{HOSTNAME_MAX_LEN, VERSION};
pub use crate::record::NodeConfig;
use crate::validate::{self, BrokerAddress, Error, Field};

/// The record baked into the firmware image
pub type Config = NodeConfig<'static>;

/// Wi-Fi authentication implied by the password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    Open,
    Protected,
}

impl<'a> NodeConfig<'a> {
    pub fn broker_address(&self) -> Result<BrokerAddress<'a>, Error> {
        validate::parse_broker(self.mqtt_broker)
    }

    /// Hostname in the fixed-capacity form the DHCP client option takes.
    pub fn dhcp_hostname(&self) -> Result<String<HOSTNAME_MAX_LEN>, Error> {
        validate::check_host(self.host)?;
        String::from_str(self.host).map_err(|_| Error::TooLong(Field::Host, HOSTNAME_MAX_LEN))
    }

    pub fn security(&self) -> Security {
        if self.password.is_empty() {
            Security::Open
        } else {
            Security::Protected
        }
    }

    /// Log the record at startup. The password is never logged.
    pub fn log_summary(&self) {
        info!("Node {} (firmware {})", self.host, VERSION);
        info!("Wi-Fi SSID: {:?} ({:?})", self.ssid, self.security());
        match self.broker_address() {
            Ok(broker) => info!("MQTT broker: {}", broker),
            Err(e) => log::error!("MQTT broker {:?} unusable: {}", self.mqtt_broker, e),
        }
    }
}

// config values are generated at compile time from cfg.toml
include!(concat!(env!("OUT_DIR"), "/config.rs"));
