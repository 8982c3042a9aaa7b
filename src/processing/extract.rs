//! Host address extraction from provisioning output.

use crate::error::{InventoryError, Result};
use crate::models::{HostAddress, ProvisioningOutput};
use std::collections::HashSet;

/// Read and validate the host addresses held by output variable `key`.
///
/// Blank entries are skipped and duplicates dropped, keeping the first one.
///
/// # Returns
/// * `Ok(Vec<HostAddress>)` - at least one address, in document order
/// * `Err(MissingField)` - `key` or `key.value` is absent, or holds no address
/// * `Err(MalformedInput)` - the value is not a string or list of strings,
///   or an entry is not a valid address
pub fn extract_hosts(output: &ProvisioningOutput, key: &str) -> Result<Vec<HostAddress>> {
    let variable = output.variable(key)?;
    if variable.sensitive {
        log::debug!("output '{key}' is marked sensitive, rendering it anyway");
    }
    let is_list = variable.value.is_list();

    let mut seen = HashSet::new();
    let mut hosts = Vec::new();
    for (i, raw) in variable.value.addresses().iter().enumerate() {
        let field = if is_list {
            format!("{key}.value[{i}]")
        } else {
            format!("{key}.value")
        };
        if raw.trim().is_empty() {
            log::warn!("Skipping blank host address at {field}");
            continue;
        }
        let host: HostAddress = raw
            .parse()
            .map_err(|e| InventoryError::malformed(output.source(), format!("{field}: {e}")))?;
        if !seen.insert(host.clone()) {
            log::warn!("Dropping duplicate host {host} at {field}");
            continue;
        }
        log::trace!("host {host} from {field}");
        hosts.push(host);
    }

    if hosts.is_empty() {
        return Err(InventoryError::missing(
            output.source(),
            format!("{key}.value"),
        ));
    }
    log::info!("Found {} host(s) in output '{key}'", hosts.len());
    Ok(hosts)
}
