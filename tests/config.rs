use std::{fs, path::PathBuf};

use opensrv_node01::{
    codegen, validate, BrokerAddress, Config, NodeConfig, Security, CONFIG,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    host: String,
    ssid: String,
    password: String,
    mqtt_broker: String,
}

// Same file the build script read
fn config_path() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match option_env!("NODE_CONFIG") {
        Some(path) => root.join(path),
        None => root.join("cfg.toml"),
    }
}

fn load() -> RawConfig {
    let toml_str = fs::read_to_string(config_path()).unwrap();
    toml::from_str(&toml_str).unwrap()
}

#[test]
fn record_matches_config_file() {
    let raw = load();

    assert_eq!(CONFIG.host, raw.host);
    assert_eq!(CONFIG.ssid, raw.ssid);
    assert_eq!(CONFIG.password, raw.password);
    assert_eq!(CONFIG.mqtt_broker, raw.mqtt_broker);
}

#[test]
fn record_has_exactly_four_fields() {
    // Fails to compile if a field is added or removed
    let NodeConfig {
        host,
        ssid,
        password,
        mqtt_broker,
    } = CONFIG;

    let fields = [host, ssid, password, mqtt_broker];
    assert_eq!(fields.len(), 4);
}

#[test]
fn generation_is_deterministic() {
    let raw = load();
    let cfg = NodeConfig {
        host: &raw.host,
        ssid: &raw.ssid,
        password: &raw.password,
        mqtt_broker: &raw.mqtt_broker,
    };

    let mut first = String::new();
    let mut second = String::new();
    codegen::write_record(&mut first, &cfg).unwrap();
    codegen::write_record(&mut second, &cfg).unwrap();

    assert_eq!(first, second);
    assert_eq!(cfg, CONFIG);
}

#[test]
fn broker_is_a_host_address() {
    match CONFIG.broker_address().unwrap() {
        BrokerAddress::Ip(ip) => {
            assert_eq!(ip.to_string().parse::<std::net::IpAddr>().unwrap(), ip)
        }
        BrokerAddress::Hostname(name) => assert_eq!(name, CONFIG.mqtt_broker),
    }
}

#[test]
fn host_uses_hostname_charset() {
    assert!(!CONFIG.host.is_empty());
    assert!(CONFIG
        .host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    assert_eq!(CONFIG.dhcp_hostname().unwrap().as_str(), CONFIG.host);
}

#[test]
fn record_passes_build_checks() {
    assert_eq!(validate::validate(&CONFIG), Ok(()));
    assert!(!validate::is_placeholder(CONFIG.ssid));
    assert!(!validate::is_placeholder(CONFIG.password));
}

#[test]
fn security_follows_password() {
    let expected = if CONFIG.password.is_empty() {
        Security::Open
    } else {
        Security::Protected
    };
    assert_eq!(CONFIG.security(), expected);
}

#[test]
fn shared_by_reference_across_threads() {
    fn ssid_of(cfg: &Config) -> &'static str {
        cfg.ssid
    }

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| ssid_of(&CONFIG)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), CONFIG.ssid);
    }
}

#[test]
fn shipped_example_is_rejected() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cfg.toml.example");
    let raw: RawConfig = toml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let cfg = NodeConfig {
        host: &raw.host,
        ssid: &raw.ssid,
        password: &raw.password,
        mqtt_broker: &raw.mqtt_broker,
    };

    assert_eq!(validate::problems(&cfg).count(), 2);
}
