//! Inventory document assembly.

use super::extract_hosts;
use crate::config::{InventorySettings, ENV_GROUP};
use crate::error::{InventoryError, Result};
use crate::models::{InventoryDocument, InventoryGroup, ProvisioningOutput};

/// Build the inventory: one group holding every host of the configured output.
pub fn build_inventory(
    output: &ProvisioningOutput,
    settings: &InventorySettings,
) -> Result<InventoryDocument> {
    let hosts = extract_hosts(output, &settings.output_key)?;

    let group = InventoryGroup::new(&settings.group, hosts)
        .map_err(|message| InventoryError::InvalidConfig {
            name: ENV_GROUP.to_string(),
            message,
        })?
        .with_vars(settings.group_vars.clone());

    let mut document = InventoryDocument::new();
    document
        .add_group(group)
        .map_err(|message| InventoryError::InvalidConfig {
            name: ENV_GROUP.to_string(),
            message,
        })?;

    log::debug!(
        "built inventory groups={} hosts={}",
        document.groups().len(),
        document.host_count()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default() {
        let output = ProvisioningOutput::parse(
            "test.json",
            r#"{"vm_public_ip": {"value": "203.0.113.5"}}"#,
        )
        .unwrap();
        let doc = build_inventory(&output, &InventorySettings::default()).unwrap();
        assert_eq!(doc.render(), "[azure_vms]\n203.0.113.5\n");
    }

    #[test]
    fn test_build_custom_group() {
        let output = ProvisioningOutput::parse(
            "test.json",
            r#"{"web_ips": {"value": ["10.0.0.4", "web-01.example.com"]}}"#,
        )
        .unwrap();
        let settings = InventorySettings {
            output_key: "web_ips".to_string(),
            group: "web".to_string(),
            group_vars: vec![("ansible_user".to_string(), "azureuser".to_string())],
        };
        let doc = build_inventory(&output, &settings).unwrap();
        assert_eq!(
            doc.render(),
            "[web]\n10.0.0.4\nweb-01.example.com\n\n[web:vars]\nansible_user=azureuser\n"
        );
    }

    #[test]
    fn test_build_bad_group_name() {
        let output = ProvisioningOutput::parse(
            "test.json",
            r#"{"vm_public_ip": {"value": "203.0.113.5"}}"#,
        )
        .unwrap();
        let settings = InventorySettings {
            group: "azure vms".to_string(),
            ..Default::default()
        };
        let err = build_inventory(&output, &settings).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidConfig { .. }));
    }
}
