//! Shared JSON persistence helpers for the store files.
//!
//! Both stores are full-file units: a load parses the whole file, a save
//! rewrites it through a temp file + rename so it is never half-written.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Read and parse a JSON store file. `Ok(None)` when the file doesn't exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut buf = String::new();
    File::open(path)?.read_to_string(&mut buf)?;
    match serde_json::from_str(&buf) {
        Ok(value) => Ok(Some(value)),
        Err(source) => Err(Error::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serialize a value and overwrite the store file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_string_pretty(value)?;
    let mut f = File::create(&tmp)?;
    f.write_all(data.as_bytes())?;
    f.flush()?;
    fs::rename(tmp, path)?;
    Ok(())
}
