//! Inventory document model and its line-oriented text format.
//!
//! ```text
//! [azure_vms]
//! 203.0.113.5
//!
//! [azure_vms:vars]
//! ansible_user=azureuser
//! ```
//!
//! The `:vars` section is only written when the group has variables.

use super::HostAddress;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid Regex"))
}

/// Group and variable names: letters, digits and underscores, not starting with a digit.
pub fn is_valid_identifier(name: &str) -> bool {
    get_identifier_regex().is_match(name)
}

/// A named group of hosts, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup {
    name: String,
    hosts: Vec<HostAddress>,
    vars: Vec<(String, String)>,
}

impl InventoryGroup {
    pub fn check_name(name: &str) -> Result<(), String> {
        if is_valid_identifier(name) {
            Ok(())
        } else {
            Err(format!(
                "invalid group name '{name}', use letters, digits and underscores"
            ))
        }
    }

    /// Create a group. Fails on an invalid name or an empty host list.
    pub fn new(name: &str, hosts: Vec<HostAddress>) -> Result<InventoryGroup, String> {
        Self::check_name(name)?;
        if hosts.is_empty() {
            return Err(format!("group '{name}' has no hosts"));
        }
        Ok(InventoryGroup {
            name: name.to_string(),
            hosts,
            vars: vec![],
        })
    }

    pub fn with_vars(mut self, vars: Vec<(String, String)>) -> InventoryGroup {
        self.vars = vars;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hosts(&self) -> &[HostAddress] {
        &self.hosts
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }
}

/// Ordered group sections, regenerated wholesale on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryDocument {
    groups: Vec<InventoryGroup>,
}

impl InventoryDocument {
    pub fn new() -> InventoryDocument {
        InventoryDocument { groups: vec![] }
    }

    /// Append a group. Group names are unique within a document.
    pub fn add_group(&mut self, group: InventoryGroup) -> Result<(), String> {
        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(format!("duplicate group '{}'", group.name));
        }
        self.groups.push(group);
        Ok(())
    }

    pub fn groups(&self) -> &[InventoryGroup] {
        &self.groups
    }

    pub fn host_count(&self) -> usize {
        self.groups.iter().map(|g| g.hosts.len()).sum()
    }

    /// The document as inventory file text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InventoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for host in &self.hosts {
            writeln!(f, "{host}")?;
        }
        if !self.vars.is_empty() {
            writeln!(f)?;
            writeln!(f, "[{}:vars]", self.name)?;
            for (key, value) in &self.vars {
                writeln!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for InventoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
