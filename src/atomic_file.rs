//! Whole-file replacement through a sibling temporary file.

use crate::error::{InventoryError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Replace `path` with `contents`.
///
/// The bytes go to a sibling temporary file that is then renamed over the
/// target, so on failure the previous file stays as it was and no temporary
/// file is left behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    log::debug!("Writing {} bytes to {}", contents.len(), temp_path.display());
    std::fs::write(&temp_path, contents).map_err(|e| {
        // Best effort, the write may have created a partial file.
        let _ = std::fs::remove_file(&temp_path);
        InventoryError::io(path, e)
    })?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(InventoryError::io(path, e));
    }
    Ok(())
}

/// `dir/inventory.ini` -> `dir/.inventory.ini.tmp`
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        InventoryError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
