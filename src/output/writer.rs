//! Inventory file writer.

use crate::atomic_file::write_atomic;
use crate::error::Result;
use crate::models::InventoryDocument;
use std::path::Path;

/// Write the inventory to `path`, replacing any existing file.
///
/// On failure a previous inventory stays as it was.
///
/// # Returns
/// * `Ok(usize)` - bytes written
/// * `Err(IoFailure)` - the file could not be written or moved into place
pub fn write_inventory(document: &InventoryDocument, path: &Path) -> Result<usize> {
    let text = document.render();
    write_atomic(path, text.as_bytes())?;

    log::info!(
        "Wrote inventory {} ({} bytes, {} host(s))",
        path.display(),
        text.len(),
        document.host_count()
    );
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::models::InventoryGroup;

    fn document(addr: &str) -> InventoryDocument {
        let mut doc = InventoryDocument::new();
        doc.add_group(InventoryGroup::new("azure_vms", vec![addr.parse().unwrap()]).unwrap())
            .unwrap();
        doc
    }

    #[test]
    fn test_write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.ini");
        std::fs::write(&path, "stale content\n").unwrap();

        let written = write_inventory(&document("203.0.113.5"), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[azure_vms]\n203.0.113.5\n");
        assert_eq!(written, text.len());
        assert!(!dir.path().join(".inventory.ini.tmp").exists());
    }

    #[test]
    fn test_missing_directory_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("inventory.ini");
        let err = write_inventory(&document("203.0.113.5"), &path).unwrap_err();
        assert!(matches!(err, InventoryError::IoFailure { .. }));
        assert!(!path.exists());
    }
}
