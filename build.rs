use std::{env, error::Error, fs, path::Path, path::PathBuf};

use serde::Deserialize;

// Share the record, rules and code generator with the library so the
// build-time check and the runtime helpers can't drift apart.
#[allow(dead_code)]
mod constants {
    include!("src/constants.rs");
}
#[allow(dead_code)]
mod record {
    include!("src/record.rs");
}
#[allow(dead_code)]
mod validate {
    include!("src/validate.rs");
}
mod codegen {
    include!("src/codegen.rs");
}

use constants::{CONFIG_FILE, CONFIG_PATH_ENV};
use record::NodeConfig;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    host: String,
    ssid: String,
    password: String,
    mqtt_broker: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml or its override changes
    println!("cargo:rerun-if-env-changed={}", CONFIG_PATH_ENV);
    let path = env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    println!("cargo:rerun-if-changed={}", path.display());

    // Read and parse
    let toml_str = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let raw: RawConfig =
        toml::from_str(&toml_str).map_err(|e| format!("{}: {}", path.display(), e))?;

    let cfg = NodeConfig {
        host: &raw.host,
        ssid: &raw.ssid,
        password: &raw.password,
        mqtt_broker: &raw.mqtt_broker,
    };

    // Refuse to bake placeholder or malformed values into the image
    let mut rejected = 0;
    for problem in validate::problems(&cfg) {
        println!("cargo:warning={}: {}", path.display(), problem);
        rejected += 1;
    }
    if rejected > 0 {
        return Err(format!(
            "{} has {} invalid value(s), see warnings above",
            path.display(),
            rejected
        )
        .into());
    }

    // Generate Rust code
    let mut code = String::new();
    codegen::write_record(&mut code, &cfg)?;

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
