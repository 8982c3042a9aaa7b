//! Inventory output.
//!
//! - [`writer`] - atomic inventory file writes
//! - [`terminal`] - render summary for the terminal

mod terminal;
mod writer;

pub use terminal::{print_summary, summary_lines};
pub use writer::write_inventory;
