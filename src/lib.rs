// cargo watch -x 'fmt' -x 'run'

//! Render a configuration-management host inventory from Azure VM
//! provisioning output.
//!
//! provisioning tool -> `terraform_output.json` -> [`render_inventory`] -> `inventory.ini`

mod atomic_file;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod provisioner;

use config::Config;
pub use error::{InventoryError, Result};
use models::InventoryDocument;

/// Read the provisioning output, build the inventory and write it.
///
/// Linear read, transform, write. Any failure returns before the output
/// file is replaced.
pub fn render_inventory(config: &Config) -> Result<InventoryDocument> {
    log::info!(
        "#Start render_inventory() {} -> {}",
        config.input.display(),
        config.output.display()
    );

    let provisioning = if config.refresh {
        provisioner::refresh_provisioning_output(&config.provisioner_cmd, &config.input)?
    } else {
        provisioner::read_provisioning_output(&config.input)?
    };
    let document = processing::build_inventory(&provisioning, &config.settings)?;
    output::write_inventory(&document, &config.output)?;

    Ok(document)
}
