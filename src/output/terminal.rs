//! Terminal output utilities.

use crate::models::InventoryDocument;
use colored::Colorize;
use std::path::Path;

/// One line per group: `[name] N host(s) -> path`.
pub fn summary_lines(document: &InventoryDocument, path: &Path) -> Vec<String> {
    document
        .groups()
        .iter()
        .map(|g| {
            format!(
                "[{name}] {count} host(s) -> {path}",
                name = g.name(),
                count = g.hosts().len(),
                path = path.display()
            )
        })
        .collect()
}

/// Print the render summary to stdout.
pub fn print_summary(document: &InventoryDocument, path: &Path) {
    for line in summary_lines(document, path) {
        println!("{} {line}", "OK".on_green());
    }
}
