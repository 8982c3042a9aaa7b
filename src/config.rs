//! Runtime configuration.
//!
//! Defaults are compiled in. An optional `.env` file (loaded by `main`) and
//! the process environment override them. There are no command line flags.

use crate::error::{InventoryError, Result};
use crate::models::{is_valid_identifier, InventoryGroup};
use std::env::VarError;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "terraform_output.json";
pub const DEFAULT_OUTPUT: &str = "inventory.ini";
pub const DEFAULT_OUTPUT_KEY: &str = "vm_public_ip";
pub const DEFAULT_GROUP: &str = "azure_vms";
pub const DEFAULT_PROVISIONER_CMD: &str = "terraform output -json";

pub const ENV_INPUT: &str = "INVENTORY_INPUT";
pub const ENV_OUTPUT: &str = "INVENTORY_OUTPUT";
pub const ENV_OUTPUT_KEY: &str = "INVENTORY_OUTPUT_KEY";
pub const ENV_GROUP: &str = "INVENTORY_GROUP";
pub const ENV_GROUP_VARS: &str = "INVENTORY_GROUP_VARS";
pub const ENV_REFRESH: &str = "INVENTORY_REFRESH";
pub const ENV_PROVISIONER_CMD: &str = "INVENTORY_PROVISIONER_CMD";

const ENV_VARS: [&str; 7] = [
    ENV_INPUT,
    ENV_OUTPUT,
    ENV_OUTPUT_KEY,
    ENV_GROUP,
    ENV_GROUP_VARS,
    ENV_REFRESH,
    ENV_PROVISIONER_CMD,
];

/// Settings that shape the rendered inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySettings {
    /// Provisioning output variable holding the host address(es).
    pub output_key: String,
    /// Group section the hosts are listed under.
    pub group: String,
    /// Ordered `key=value` pairs for the `[group:vars]` section.
    pub group_vars: Vec<(String, String)>,
}

impl Default for InventorySettings {
    fn default() -> Self {
        InventorySettings {
            output_key: DEFAULT_OUTPUT_KEY.to_string(),
            group: DEFAULT_GROUP.to_string(),
            group_vars: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub settings: InventorySettings,
    /// Re-run the provisioner output command before rendering.
    pub refresh: bool,
    pub provisioner_cmd: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            settings: InventorySettings::default(),
            refresh: false,
            provisioner_cmd: DEFAULT_PROVISIONER_CMD.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// A variable that is set but not valid UTF-8 is `InvalidConfig`, never
    /// silently replaced by the default.
    pub fn from_env() -> Result<Config> {
        for name in ENV_VARS {
            read_env(name)?;
        }
        Self::from_lookup(|name| read_env(name).ok().flatten())
    }

    /// Build the configuration from any variable lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let group = get(ENV_GROUP).unwrap_or(defaults.settings.group);
        // Reject the name early, before any file is touched.
        InventoryGroup::check_name(&group).map_err(|message| InventoryError::InvalidConfig {
            name: ENV_GROUP.to_string(),
            message,
        })?;

        let group_vars = match get(ENV_GROUP_VARS) {
            Some(raw) => parse_group_vars(&raw)?,
            None => vec![],
        };

        let refresh = match get(ENV_REFRESH) {
            Some(raw) => parse_flag(ENV_REFRESH, &raw)?,
            None => false,
        };

        let config = Config {
            input: get(ENV_INPUT).map(PathBuf::from).unwrap_or(defaults.input),
            output: get(ENV_OUTPUT).map(PathBuf::from).unwrap_or(defaults.output),
            settings: InventorySettings {
                output_key: get(ENV_OUTPUT_KEY).unwrap_or(defaults.settings.output_key),
                group,
                group_vars,
            },
            refresh,
            provisioner_cmd: get(ENV_PROVISIONER_CMD).unwrap_or(defaults.provisioner_cmd),
        };
        log::debug!("config={config:?}");
        Ok(config)
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(InventoryError::InvalidConfig {
            name: name.to_string(),
            message: format!("value is not valid UTF-8: {raw:?}"),
        }),
    }
}

/// Parse `key=value,key=value` into ordered pairs.
fn parse_group_vars(raw: &str) -> Result<Vec<(String, String)>> {
    let invalid = |message: String| InventoryError::InvalidConfig {
        name: ENV_GROUP_VARS.to_string(),
        message,
    };

    let mut vars: Vec<(String, String)> = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| invalid(format!("expected key=value, got '{entry}'")))?;
        let (key, value) = (key.trim(), value.trim());
        if !is_valid_identifier(key) {
            return Err(invalid(format!("invalid variable name '{key}'")));
        }
        if value.is_empty() {
            return Err(invalid(format!("empty value for '{key}'")));
        }
        if value.contains(['\n', '\r']) {
            return Err(invalid(format!("line break in value for '{key}'")));
        }
        if vars.iter().any(|(k, _)| k == key) {
            return Err(invalid(format!("duplicate variable '{key}'")));
        }
        vars.push((key.to_string(), value.to_string()));
    }
    Ok(vars)
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(InventoryError::InvalidConfig {
            name: name.to_string(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}
