use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NodeConfig<'a> {
    // Hostname advertised by the node (DHCP hostname, MQTT client id)
    pub host: &'a str,

    // Wi-Fi SSID to connect to
    pub ssid: &'a str,

    // Wi-Fi pre-shared key, empty for an open network
    pub password: &'a str,

    // MQTT broker IP address or hostname
    pub mqtt_broker: &'a str,
}

// Never print the pre-shared key
impl fmt::Debug for NodeConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "<redacted>"
        };

        f.debug_struct("NodeConfig")
            .field("host", &self.host)
            .field("ssid", &self.ssid)
            .field("password", &password)
            .field("mqtt_broker", &self.mqtt_broker)
            .finish()
    }
}
