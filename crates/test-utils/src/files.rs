//! Temporary files for tests that read GeoJSON from disk.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

/// Write `contents` to a temporary `.geojson` file.
///
/// The file is removed when the returned handle is dropped.
pub fn temp_geojson(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".geojson").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// A temporary directory plus the path of an output file inside it.
pub fn temp_output(name: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    Ok((dir, path))
}
