//! Whole-file JSON read/write helpers.

use super::{StorageError, StorageResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads and deserializes `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// - `Io` when the file exists but cannot be read.
/// - `DataLoading` when the content is not valid JSON for `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let started_at = Instant::now();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=json_read module=storage status=missing path={}",
                path.display()
            );
            return Ok(None);
        }
        Err(source) => {
            error!(
                "event=json_read module=storage status=error error_code=io_failed path={} error={}",
                path.display(),
                source
            );
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            info!(
                "event=json_read module=storage status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(Some(value))
        }
        Err(err) => {
            error!(
                "event=json_read module=storage status=error error_code=invalid_data path={} line={} column={}",
                path.display(),
                err.line(),
                err.column()
            );
            Err(StorageError::DataLoading {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
        }
    }
}

/// Serializes `value` and atomically replaces `path` with it.
///
/// Parent directories are created as needed. The JSON is first written to a
/// sibling temp file, then renamed over `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let started_at = Instant::now();
    let io_error = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(value)
        .map_err(|err| io_error(std::io::Error::new(ErrorKind::InvalidData, err)))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let temp_path = temp_path_for(path);
    let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&temp_path);
        error!(
            "event=json_write module=storage status=error error_code=io_failed path={} error={}",
            path.display(),
            source
        );
        return Err(io_error(source));
    }

    info!(
        "event=json_write module=storage status=ok path={} duration_ms={}",
        path.display(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
