//! Provisioning tool interaction.
//!
//! - [`cli`] - command execution for the provisioning tool
//! - [`file`] - reading and refreshing the saved JSON output

mod cli;
mod file;

pub use cli::run;
pub use file::{read_provisioning_output, refresh_provisioning_output};
