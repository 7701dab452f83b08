/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file read by the build script, relative to the package root
pub const CONFIG_FILE: &str = "cfg.toml";
/// Environment variable that overrides `CONFIG_FILE`
pub const CONFIG_PATH_ENV: &str = "NODE_CONFIG";

/// Maximum hostname length accepted by the DHCP client option buffer
pub const HOSTNAME_MAX_LEN: usize = 32;
/// Maximum SSID length in bytes (802.11)
pub const SSID_MAX_LEN: usize = 32;

/// Maximum length of a single DNS label
pub const DNS_LABEL_MAX_LEN: usize = 63;
/// Maximum length of a full DNS name (without trailing dot)
pub const DNS_NAME_MAX_LEN: usize = 253;

/// Character used to redact credentials in example configs
pub const PLACEHOLDER_CHAR: char = '*';
