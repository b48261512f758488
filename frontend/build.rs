use std::env;
use std::path::Path;

#[path = "src/dotenv_file.rs"]
mod dotenv_file;

fn main() {
    for key in dotenv_file::FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Values from .env fill in whatever the build environment leaves unset
    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        match dotenv_file::forwarded_entries(env_file) {
            Ok(entries) => {
                for (key, value) in entries {
                    if env::var(&key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
            Err(e) => println!("cargo:warning=Could not read .env: {}", e),
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/dotenv_file.rs");
}
