//! Generic resource entry from `az resource list`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    /// Provider type, e.g. `Microsoft.Web/sites`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Kind string; null for most resource types.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl ResourceRecord {
    pub fn new(resource_type: &str, kind: Option<&str>, name: &str) -> Self {
        ResourceRecord {
            resource_type: resource_type.to_string(),
            kind: kind.map(str::to_string),
            name: name.to_string(),
        }
    }

    /// Kind string, empty when absent.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }
}
