//! Generic configuration persistence
//!
//! Type-preserving read/write/initialize operations for any configuration
//! struct that can produce its own default value. Values are stored as
//! pretty-printed JSON at a caller-supplied path.
//!
//! All operations are synchronous, blocking filesystem calls with no
//! in-process locking. Concurrent writers against the same path race
//! (last writer wins); callers needing safe concurrent access must
//! serialize calls externally.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Capability for configuration types: produce a canonical default instance.
///
/// Implemented automatically for every type that implements [`Default`], so
/// a configuration struct only needs `#[derive(Default)]` or a manual
/// `Default` impl carrying its real default values.
pub trait Defaultable {
    /// Return the canonical default instance of this type.
    fn default_value() -> Self;
}

impl<T: Default> Defaultable for T {
    fn default_value() -> Self {
        T::default()
    }
}

/// Construct the default configuration value in memory.
///
/// Never touches the filesystem. Primarily useful for tests and programmatic
/// bootstrapping where persisting a file is unwanted.
pub fn instantiate<T: Defaultable>() -> T {
    T::default_value()
}

/// Read the file at `path` and deserialize it into `value` in place.
///
/// `value` is assigned only after the whole file has parsed successfully, so
/// a failed load leaves it untouched. The file is never created here.
///
/// Returns [`StoreError::NotFound`] when the path does not exist,
/// [`StoreError::Io`] for any other read failure, and [`StoreError::Decode`]
/// when the contents are not a valid encoding of `T`.
pub fn load<T, P>(path: P, value: &mut T) -> Result<(), StoreError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let data = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    *value = serde_json::from_str(&data).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Serialize `value` as pretty-printed JSON (two-space indentation) and
/// write it to `path`, fully replacing any existing content.
///
/// Missing parent directories are not created; use [`init_if_absent`] for
/// first-run bootstrapping. The write is a direct overwrite, not an atomic
/// temp-file-and-rename: a crash mid-write can leave a truncated file.
pub fn save<T, P>(path: P, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let data = serde_json::to_string_pretty(value).map_err(StoreError::Encode)?;
    fs::write(path, data).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Create the config file at `path` with default contents if it does not
/// already exist.
///
/// Fails with [`StoreError::AlreadyExists`] when anything is present at the
/// path, leaving it unchanged. An existence check that fails for any reason
/// other than not-found (e.g. permission denied) propagates as
/// [`StoreError::Io`]. Missing parent directories of `path` are created;
/// this is the only operation that creates directories.
pub fn init_if_absent<T, P>(path: P) -> Result<(), StoreError>
where
    T: Defaultable + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(_) => return Err(StoreError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    if let Some(parent) = path.parent() {
        // A bare filename yields an empty parent; nothing to create then.
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    save(path, &T::default_value())?;
    debug!(path = %path.display(), "initialized config with defaults");
    Ok(())
}
