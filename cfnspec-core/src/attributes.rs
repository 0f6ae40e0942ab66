//! Attributes - Common per-resource stack metadata
//!
//! Every resource in a template carries the same optional CloudFormation
//! attributes next to `Type` and `Properties`. Defined once here; resource
//! schemas never redefine them.

use serde::{Deserialize, Serialize};

/// Resource deletion behavior (also used for `UpdateReplacePolicy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `DependsOn` accepts a single logical ID or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    pub fn logical_ids(&self) -> Vec<&str> {
        match self {
            DependsOn::One(id) => vec![id.as_str()],
            DependsOn::Many(ids) => ids.iter().map(|s| s.as_str()).collect(),
        }
    }
}

/// Stack-level metadata attached to every resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResourceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<DeletionPolicy>,

    /// Name of a condition in the template's `Conditions` section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,

    /// Free-form, not interpreted by CloudFormation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Resource-type-specific signal configuration, carried opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<serde_json::Value>,

    /// Resource-type-specific update configuration, carried opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<serde_json::Value>,
}

impl ResourceAttributes {
    /// Logical IDs named in `DependsOn`
    pub fn depends_on_ids(&self) -> Vec<&str> {
        self.depends_on
            .as_ref()
            .map(|d| d.logical_ids())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_full_attributes() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "DeletionPolicy": "Retain",
            "UpdateReplacePolicy": "Snapshot",
            "Condition": "IsProd",
            "DependsOn": ["Vpc", "Subnet"],
            "Metadata": {"Team": "platform"}
        }))
        .unwrap();

        assert_eq!(attrs.deletion_policy, Some(DeletionPolicy::Retain));
        assert_eq!(attrs.update_replace_policy, Some(DeletionPolicy::Snapshot));
        assert_eq!(attrs.condition.as_deref(), Some("IsProd"));
        assert_eq!(attrs.depends_on_ids(), vec!["Vpc", "Subnet"]);
    }

    #[test]
    fn depends_on_single_string() {
        let attrs: ResourceAttributes =
            serde_json::from_value(json!({"DependsOn": "Vpc"})).unwrap();
        assert_eq!(attrs.depends_on_ids(), vec!["Vpc"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        // Attributes are pulled from the full resource object, which also
        // carries Type and Properties.
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "Type": "AWS::EC2::VPC",
            "Properties": {"CidrBlock": "10.0.0.0/16"}
        }))
        .unwrap();
        assert_eq!(attrs, ResourceAttributes::default());
    }

    #[test]
    fn invalid_deletion_policy_is_an_error() {
        let result: Result<ResourceAttributes, _> =
            serde_json::from_value(json!({"DeletionPolicy": "Keep"}));
        assert!(result.is_err());
    }
}
