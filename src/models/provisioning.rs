//! Provisioning tool output model.
//!
//! The document is what `terraform output -json` prints: a JSON object
//! mapping each output variable name to a record with a `value` field.
//!
//! ```json
//! {"vm_public_ip": {"sensitive": false, "type": "string", "value": "203.0.113.5"}}
//! ```
//!
//! Only the requested variable is interpreted, sibling keys may hold anything.

use crate::error::{InventoryError, Result};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Parsed provisioning output document.
#[derive(Debug, Clone)]
pub struct ProvisioningOutput {
    /// Where the document was read from, used in error messages.
    source: PathBuf,
    outputs: Map<String, Value>,
}

/// One output variable record.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OutputVariable {
    pub value: OutputValue,
    #[serde(default)]
    pub sensitive: bool,
    /// Type description emitted by the provisioning tool, not interpreted.
    #[serde(rename = "type", default)]
    pub value_type: Option<Value>,
}

/// Raw address strings of an output value, in document order.
///
/// Accepts a single string, a list of strings, or null (no addresses).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputValue {
    addresses: Vec<String>,
    /// Set when the JSON value was an array, whatever its length.
    list: bool,
}

impl OutputValue {
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn is_list(&self) -> bool {
        self.list
    }
}

impl<'de> Deserialize<'de> for OutputValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<OutputValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OutputValueVisitor;

        impl<'de> Visitor<'de> for OutputValueVisitor {
            type Value = OutputValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host address string or a list of host address strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<OutputValue, E> {
                Ok(OutputValue {
                    addresses: vec![v.to_string()],
                    list: false,
                })
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<OutputValue, E> {
                Ok(OutputValue::default())
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<OutputValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut addresses = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(v) = seq.next_element::<String>()? {
                    addresses.push(v);
                }
                Ok(OutputValue {
                    addresses,
                    list: true,
                })
            }
        }

        deserializer.deserialize_any(OutputValueVisitor)
    }
}

impl ProvisioningOutput {
    /// Parse a provisioning output document.
    ///
    /// # Errors
    /// * `MalformedInput` - not JSON, or the top level is not an object
    pub fn parse(source: impl Into<PathBuf>, json: &str) -> Result<ProvisioningOutput> {
        let source = source.into();
        let document: Value = serde_json::from_str(json).map_err(|e| {
            InventoryError::malformed(&source, format!("invalid JSON: {e}"))
        })?;
        match document {
            Value::Object(outputs) => Ok(ProvisioningOutput { source, outputs }),
            other => Err(InventoryError::malformed(
                &source,
                format!("expected a JSON object of outputs, got {}", json_kind(&other)),
            )),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Output variable names, in document order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.outputs.keys()
    }

    /// The raw `value` of an output variable.
    ///
    /// # Errors
    /// * `MissingField` - `key` or `key.value` is absent
    /// * `MalformedInput` - the `key` entry is not a record
    pub fn output_value(&self, key: &str) -> Result<&Value> {
        self.record(key)?
            .get("value")
            .ok_or_else(|| InventoryError::missing(&self.source, format!("{key}.value")))
    }

    /// Deserialize an output variable record.
    ///
    /// Type errors report the JSON path that failed, e.g. `vm_public_ip.value[1]`.
    pub fn variable(&self, key: &str) -> Result<OutputVariable> {
        // Checked first so an absent value is MissingField, not a type error.
        self.output_value(key)?;
        let record = self
            .outputs
            .get(key)
            .ok_or_else(|| InventoryError::missing(&self.source, key))?;

        serde_path_to_error::deserialize(record).map_err(|e| {
            InventoryError::malformed(
                &self.source,
                format!("{key}.{path}: {error}", path = e.path(), error = e.inner()),
            )
        })
    }

    fn record(&self, key: &str) -> Result<&Map<String, Value>> {
        match self.outputs.get(key) {
            None => Err(InventoryError::missing(&self.source, key)),
            Some(Value::Object(record)) => Ok(record),
            Some(other) => Err(InventoryError::malformed(
                &self.source,
                format!(
                    "output '{key}' should be a record with a value field, got {}",
                    json_kind(other)
                ),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ProvisioningOutput> {
        ProvisioningOutput::parse("test.json", json)
    }

    #[test]
    fn test_single_value() {
        let output = parse(
            r#"{"vm_public_ip": {"sensitive": false, "type": "string", "value": "203.0.113.5"}}"#,
        )
        .unwrap();
        let var = output.variable("vm_public_ip").unwrap();
        assert_eq!(var.value.addresses(), ["203.0.113.5".to_string()]);
        assert!(!var.value.is_list());
        assert!(!var.sensitive);
        assert_eq!(var.value_type, Some(Value::String("string".to_string())));
    }

    #[test]
    fn test_siblings_ignored() {
        let output = parse(
            r#"{"rg_name": "not-a-record", "ids": [1, 2], "vm_public_ip": {"value": "10.0.0.4"}}"#,
        )
        .unwrap();
        assert_eq!(output.names().count(), 3);
        assert_eq!(
            output.output_value("vm_public_ip").unwrap(),
            &Value::String("10.0.0.4".to_string())
        );
    }

    #[test]
    fn test_list_and_null_values() {
        let output = parse(
            r#"{"ips": {"value": ["10.0.0.4", "10.0.0.5"]}, "one": {"value": ["10.0.0.6"]}, "pending": {"value": null}}"#,
        )
        .unwrap();
        let ips = output.variable("ips").unwrap().value;
        assert_eq!(ips.addresses().len(), 2);
        assert!(ips.is_list());
        let one = output.variable("one").unwrap().value;
        assert_eq!(one.addresses().len(), 1);
        assert!(one.is_list(), "a one element array is still a list");
        let pending = output.variable("pending").unwrap().value;
        assert!(pending.addresses().is_empty());
        assert!(!pending.is_list());
    }

    #[test]
    fn test_missing_key() {
        let output = parse(r#"{"other": {"value": "x"}}"#).unwrap();
        match output.variable("vm_public_ip").unwrap_err() {
            InventoryError::MissingField { field, path } => {
                assert_eq!(field, "vm_public_ip");
                assert_eq!(path, PathBuf::from("test.json"));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_missing_value_field() {
        let output = parse(r#"{"vm_public_ip": {"sensitive": false}}"#).unwrap();
        let err = output.output_value("vm_public_ip").unwrap_err();
        assert!(
            matches!(err, InventoryError::MissingField { ref field, .. } if field == "vm_public_ip.value")
        );
    }

    #[test]
    fn test_not_json() {
        let err = parse("[azure_vms]\n203.0.113.5\n").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput { .. }));
    }

    #[test]
    fn test_top_level_not_object() {
        let err = parse(r#"["203.0.113.5"]"#).unwrap_err();
        assert!(err.to_string().contains("got an array"), "{err}");
    }

    #[test]
    fn test_record_not_object() {
        let output = parse(r#"{"vm_public_ip": "203.0.113.5"}"#).unwrap();
        let err = output.variable("vm_public_ip").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput { .. }));
    }

    #[test]
    fn test_wrong_value_type_reports_path() {
        let output = parse(r#"{"vm_public_ip": {"value": ["10.0.0.4", 42]}}"#).unwrap();
        let err = output.variable("vm_public_ip").unwrap_err();
        match err {
            InventoryError::MalformedInput { message, .. } => {
                assert!(message.starts_with("vm_public_ip.value[1]"), "{message}");
            }
            e => panic!("unexpected error {e:?}"),
        }

        let output = parse(r#"{"vm_public_ip": {"value": {"ip": "10.0.0.4"}}}"#).unwrap();
        let err = output.variable("vm_public_ip").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput { .. }));
    }
}
