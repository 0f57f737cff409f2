//! # File I/O Module
//!
//! JSON file helpers for scenarios, settings and results.
//!
//! - **Atomic saves**: Write to `.tmp`, sync, rename to prevent truncated files
//! - **Structured errors**: I/O failures map to `CalcError::FileError`,
//!   malformed JSON to `CalcError::SerializationError`
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_json, save_json};
//! use beam_core::settings::AnalysisSettings;
//! use std::path::Path;
//!
//! let settings: AnalysisSettings = load_json(Path::new("settings.json"))?;
//! save_json(&settings, Path::new("settings.copy.json"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Save a value as pretty-printed JSON using an atomic write.
///
/// The JSON goes to `<path>.tmp` first and is renamed over `path` only
/// after it has been synced to disk.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved {}", path.display());
    Ok(())
}

/// Load a JSON file into any deserializable type.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - The file could not be opened or read
/// * `Err(CalcError::SerializationError)` - The contents are not valid JSON for `T`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_json_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_json_path("roundtrip");

        let mut value = BTreeMap::new();
        value.insert("span_m".to_string(), 6.0);
        save_json(&value, &path).unwrap();

        let loaded: BTreeMap<String, f64> = load_json(&path).unwrap();
        assert_eq!(loaded, value);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_json_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_json(&vec![1.0, 2.0], &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_json::<Vec<f64>>(Path::new("/nonexistent/beam.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_malformed_json() {
        let path = temp_json_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let err = load_json::<Vec<f64>>(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
