//! Provisioning output to inventory transformation.
//!
//! - [`extract`] - host address extraction and validation
//! - [`build`] - inventory document assembly

mod build;
mod extract;

// Re-export public functions
pub use build::build_inventory;
pub use extract::extract_hosts;
