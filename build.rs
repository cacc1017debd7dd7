use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "ENTRY_PAGE",
    "DASHBOARD_PAGE",
    "COUNTER_START_DELAY_MS",
    "COUNTER_TICK_MS",
    "COUNTER_STEPS",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Variable desconocida en .env ignorada: {}", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
