//! Domain models for inventory rendering.
//!
//! - [`ProvisioningOutput`] - the provisioning tool's JSON output document
//! - [`HostAddress`] - a validated IP address or DNS name
//! - [`InventoryDocument`] and [`InventoryGroup`] - the rendered inventory

mod host;
mod inventory;
mod provisioning;

// Re-export public types
pub use host::{HostAddress, MAX_HOSTNAME_LENGTH};
pub use inventory::{is_valid_identifier, InventoryDocument, InventoryGroup};
pub use provisioning::{OutputValue, OutputVariable, ProvisioningOutput};
