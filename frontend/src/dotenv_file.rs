//! Reads the client's settings out of a `.env` file.
//!
//! `build.rs` includes this module too, so values baked into browser builds
//! are parsed by the same `dotenv` rules as [`crate::ProcessEnv::with_dotenv_from`].

use std::path::Path;

/// Keys forwarded from `.env` into compile-time `option_env!` values.
pub const FORWARDED_KEYS: [&str; 2] = ["API_BASE_URL", "RUST_ENV"];

/// The forwarded entries found in `path`, in file order.
pub fn forwarded_entries(path: &Path) -> Result<Vec<(String, String)>, dotenv::Error> {
    let mut entries = Vec::new();
    for item in dotenv::from_path_iter(path)? {
        let (key, value) = item?;
        if FORWARDED_KEYS.contains(&key.as_str()) {
            entries.push((key, value));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{API_BASE_URL_KEY, MODE_KEY};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn write_env_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("namhatta-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_forwarded_keys_match_provider_keys() {
        assert_eq!(FORWARDED_KEYS, [API_BASE_URL_KEY, MODE_KEY]);
    }

    #[test]
    fn test_quoted_values_are_unquoted() {
        let path = write_env_file(
            "quoted",
            "# backend\nAPI_BASE_URL='https://api.x'\nRUST_ENV=\"development\"\n",
        );
        let entries = forwarded_entries(&path).unwrap();
        assert_eq!(
            entries,
            vec![
                ("API_BASE_URL".to_string(), "https://api.x".to_string()),
                ("RUST_ENV".to_string(), "development".to_string()),
            ]
        );
    }

    #[test]
    fn test_other_keys_are_not_forwarded() {
        let path = write_env_file(
            "filtered",
            "DATABASE_URL=postgres://localhost/namhatta\nAPI_BASE_URL=http://10.0.0.2:5000\n",
        );
        let entries = forwarded_entries(&path).unwrap();
        assert_eq!(
            entries,
            vec![("API_BASE_URL".to_string(), "http://10.0.0.2:5000".to_string())]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("namhatta-no-such-dir").join(".env");
        assert!(forwarded_entries(&path).is_err());
    }
}
