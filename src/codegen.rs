// Renders the configuration record as Rust source. Used by build.rs through
// include!, which then writes the result to $OUT_DIR/config.rs.

use core::fmt::{self, Write};

use crate::record::NodeConfig;

/// Write `pub const CONFIG` for `cfg`. Values go through `{:?}`, which
/// escapes them into valid string literals.
pub fn write_record<W: Write>(out: &mut W, cfg: &NodeConfig<'_>) -> fmt::Result {
    write!(
        out,
        r#"pub const CONFIG: Config = NodeConfig {{
    host: {host:?},
    ssid: {ssid:?},
    password: {password:?},
    mqtt_broker: {broker:?},
}};
"#,
        host = cfg.host,
        ssid = cfg.ssid,
        password = cfg.password,
        broker = cfg.mqtt_broker,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cfg: &NodeConfig<'_>) -> String {
        let mut code = String::new();
        write_record(&mut code, cfg).unwrap();
        code
    }

    #[test]
    fn renders_example_record() {
        let cfg = NodeConfig {
            host: "node01",
            ssid: "myNet",
            password: "pw1234",
            mqtt_broker: "192.168.111.199",
        };

        assert_eq!(
            render(&cfg),
            "pub const CONFIG: Config = NodeConfig {\n    \
             host: \"node01\",\n    \
             ssid: \"myNet\",\n    \
             password: \"pw1234\",\n    \
             mqtt_broker: \"192.168.111.199\",\n\
             };\n"
        );
    }

    #[test]
    fn same_input_same_output() {
        let cfg = NodeConfig {
            host: "node01",
            ssid: "Café \"upstairs\"",
            password: "p\\w",
            mqtt_broker: "fd00::1",
        };

        assert_eq!(render(&cfg), render(&cfg));
    }

    #[test]
    fn escapes_literals() {
        let cfg = NodeConfig {
            host: "node01",
            ssid: "say \"hi\"",
            password: "back\\slash\n",
            mqtt_broker: "broker.lan",
        };

        let code = render(&cfg);
        assert!(code.contains(r#"ssid: "say \"hi\"","#));
        assert!(code.contains(r#"password: "back\\slash\n","#));
    }
}
