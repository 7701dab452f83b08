// Rules applied to the configuration by the build script and available to
// the firmware at runtime. This file is also pulled into build.rs with
// include!, so it must only depend on core, constants and record.

use core::fmt;
use core::net::{IpAddr, Ipv6Addr};

use crate::constants::*;
use crate::record::NodeConfig;

/// Configuration key a problem refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Host,
    Ssid,
    Password,
    MqttBroker,
}

impl Field {
    /// Key name as written in `cfg.toml`
    pub fn key(self) -> &'static str {
        match self {
            Field::Host => "host",
            Field::Ssid => "ssid",
            Field::Password => "password",
            Field::MqttBroker => "mqtt_broker",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty(Field),
    Placeholder(Field),
    TooLong(Field, usize),
    LabelTooLong(Field),
    InvalidCharacter(Field, char),
    HyphenAtEdge(Field),
    EmptyLabel(Field),
    NumericHostname,
    InvalidIpv6,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty(field) => write!(f, "`{}` must not be empty", field),
            Error::Placeholder(field) => write!(f, "`{}` is still a placeholder value", field),
            Error::TooLong(field, max) => write!(f, "`{}` is longer than {} bytes", field, max),
            Error::LabelTooLong(field) => write!(
                f,
                "`{}` has a label longer than {} bytes",
                field, DNS_LABEL_MAX_LEN
            ),
            Error::InvalidCharacter(field, c) => {
                write!(f, "`{}` contains invalid character {:?}", field, c)
            }
            Error::HyphenAtEdge(field) => {
                write!(f, "`{}` has a label starting or ending with '-'", field)
            }
            Error::EmptyLabel(field) => write!(f, "`{}` has an empty label", field),
            Error::NumericHostname => write!(
                f,
                "`{}` is neither an IP address nor a hostname",
                Field::MqttBroker
            ),
            Error::InvalidIpv6 => write!(f, "`{}` is not a valid IPv6 address", Field::MqttBroker),
        }
    }
}

/// Broker address as the network stack needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerAddress<'a> {
    Ip(IpAddr),
    // Needs a DNS lookup before connecting
    Hostname(&'a str),
}

impl fmt::Display for BrokerAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokerAddress::Ip(ip) => write!(f, "{}", ip),
            BrokerAddress::Hostname(name) => f.write_str(name),
        }
    }
}

/// True for a non-empty value made only of `*`, the redaction used in example configs
pub fn is_placeholder(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == PLACEHOLDER_CHAR)
}

/// Node hostname: a single DNS label short enough for the DHCP hostname option.
pub fn check_host(host: &str) -> Result<(), Error> {
    let field = Field::Host;

    if host.is_empty() {
        return Err(Error::Empty(field));
    }
    if is_placeholder(host) {
        return Err(Error::Placeholder(field));
    }
    if host.len() > HOSTNAME_MAX_LEN {
        return Err(Error::TooLong(field, HOSTNAME_MAX_LEN));
    }

    check_label(field, host)
}

pub fn check_ssid(ssid: &str) -> Result<(), Error> {
    let field = Field::Ssid;

    if ssid.is_empty() {
        return Err(Error::Empty(field));
    }
    if is_placeholder(ssid) {
        return Err(Error::Placeholder(field));
    }
    if ssid.len() > SSID_MAX_LEN {
        return Err(Error::TooLong(field, SSID_MAX_LEN));
    }

    Ok(())
}

/// The password is opaque. Empty is allowed and means an open network.
pub fn check_password(password: &str) -> Result<(), Error> {
    if is_placeholder(password) {
        return Err(Error::Placeholder(Field::Password));
    }

    Ok(())
}

/// Classify the broker as an IP literal or a hostname.
///
/// IPv6 literals may be wrapped in brackets (`[fd00::1]`). A dotted name
/// whose last label is numeric is rejected rather than treated as a
/// hostname, so `192.168.1.300` fails instead of going to DNS.
pub fn parse_broker(broker: &str) -> Result<BrokerAddress<'_>, Error> {
    let field = Field::MqttBroker;

    if broker.is_empty() {
        return Err(Error::Empty(field));
    }
    if is_placeholder(broker) {
        return Err(Error::Placeholder(field));
    }

    if let Some(inner) = broker.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        return inner
            .parse::<Ipv6Addr>()
            .map(|ip| BrokerAddress::Ip(IpAddr::V6(ip)))
            .map_err(|_| Error::InvalidIpv6);
    }

    if let Ok(ip) = broker.parse::<IpAddr>() {
        return Ok(BrokerAddress::Ip(ip));
    }

    if broker.contains(':') {
        return Err(Error::InvalidIpv6);
    }

    check_hostname(field, broker)?;

    Ok(BrokerAddress::Hostname(broker))
}

fn check_hostname(field: Field, name: &str) -> Result<(), Error> {
    if name.len() > DNS_NAME_MAX_LEN {
        return Err(Error::TooLong(field, DNS_NAME_MAX_LEN));
    }

    let mut last = "";
    for label in name.split('.') {
        check_label(field, label)?;
        last = label;
    }

    if last.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::NumericHostname);
    }

    Ok(())
}

fn check_label(field: Field, label: &str) -> Result<(), Error> {
    if label.is_empty() {
        return Err(Error::EmptyLabel(field));
    }
    if label.len() > DNS_LABEL_MAX_LEN {
        return Err(Error::LabelTooLong(field));
    }
    if let Some(c) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(Error::InvalidCharacter(field, c));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(Error::HyphenAtEdge(field));
    }

    Ok(())
}

/// Every problem in the record, at most one per field, in field order.
pub fn problems(cfg: &NodeConfig<'_>) -> impl Iterator<Item = Error> {
    [
        check_host(cfg.host),
        check_ssid(cfg.ssid),
        check_password(cfg.password),
        parse_broker(cfg.mqtt_broker).map(|_| ()),
    ]
    .into_iter()
    .filter_map(Result::err)
}

pub fn validate(cfg: &NodeConfig<'_>) -> Result<(), Error> {
    match problems(cfg).next() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
