//! Provisioning output file handling.
//!
//! The provisioning tool's JSON output is saved to a file once per run and is
//! read-only to the renderer. A refresh replaces it wholesale.

use super::cli;
use crate::atomic_file::write_atomic;
use crate::error::{InventoryError, Result};
use crate::models::ProvisioningOutput;
use std::path::Path;

/// Read and parse the provisioning output file.
///
/// # Returns
/// * `Ok(ProvisioningOutput)` - the parsed document
/// * `Err(IoFailure)` - the file could not be read
/// * `Err(MalformedInput)` - the file is not a JSON object
pub fn read_provisioning_output(path: &Path) -> Result<ProvisioningOutput> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        log::warn!("Provisioning output not readable: {}", path.display());
        InventoryError::io(path, e)
    })?;
    log::info!("Reading provisioning output: {}", path.display());
    ProvisioningOutput::parse(path, &json)
}

/// Run the provisioning tool's output command and save its stdout to `path`.
///
/// The stdout must parse as a provisioning output document before anything
/// is written, and the file is replaced atomically, so a failed refresh
/// leaves the previous file in place.
pub fn refresh_provisioning_output(command: &str, path: &Path) -> Result<ProvisioningOutput> {
    log::info!("Refreshing provisioning output with '{command}'");
    let stdout = cli::run(command).map_err(|message| InventoryError::ProvisionerFailure {
        command: command.to_string(),
        message,
    })?;

    let output = ProvisioningOutput::parse(path, &stdout).map_err(|e| {
        InventoryError::ProvisionerFailure {
            command: command.to_string(),
            message: e.to_string(),
        }
    })?;

    log::warn!("Writing provisioning output to file: {}", path.display());
    write_atomic(path, stdout.as_bytes())?;
    Ok(output)
}
