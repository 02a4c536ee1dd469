use std::env;
use std::fs;
use std::path::Path;

// Variables que el crate lee vía option_env! en tiempo de compilación
const TRACKED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "DEPOT_LAT",
    "DEPOT_LNG",
    "DEPOT_LABEL",
    "MAP_DEFAULT_ZOOM",
    "ROUTE_COLOR",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    if !TRACKED_KEYS.contains(&key) {
                        println!(
                            "cargo:warning=Ignorando variable desconocida en .env: {}",
                            key
                        );
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and configure your settings.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
