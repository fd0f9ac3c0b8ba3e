//! Catalog serialization and deserialization using `MessagePack`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use sigrid_foundation::{Error, ErrorKind, Result};

use crate::catalog::Catalog;

/// Serializes a catalog to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(catalog: &Catalog) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(catalog)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a catalog from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Catalog> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a catalog to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(catalog)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    Ok(())
}

/// Loads a catalog from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    from_bytes(&bytes)
}
