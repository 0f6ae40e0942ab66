//! Template - Parsing and validating CloudFormation JSON templates
//!
//! The consuming surface for the schema corpus: parse a template, then check
//! each resource's `Properties` against the registered schema for its `Type`,
//! plus template-level reference checks (`DependsOn`, `Ref`/`Fn::GetAtt`
//! targets, condition names).

use std::collections::HashMap;
use std::fmt;

use serde_json::Value as Json;

use crate::attributes::ResourceAttributes;
use crate::schema::SchemaRegistry;
use crate::value::{Value, ValueError};

/// One resource declaration: the `Type` discriminant, its `Properties`, and
/// the shared stack attributes
#[derive(Debug, Clone)]
pub struct TemplateResource {
    pub type_name: String,
    pub properties: HashMap<String, Value>,
    pub attributes: ResourceAttributes,
}

/// A parsed CloudFormation template
#[derive(Debug, Clone, Default)]
pub struct Template {
    pub description: Option<String>,
    /// Parameter names - only identity matters for reference checking
    pub parameters: Vec<String>,
    /// Condition names
    pub conditions: Vec<String>,
    pub resources: HashMap<String, TemplateResource>,
}

/// Template parse error
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template must be a JSON object")]
    NotAnObject,

    #[error("template has no Resources section")]
    MissingResources,

    #[error("resource '{id}' must be a JSON object")]
    ResourceNotObject { id: String },

    #[error("resource '{id}' has no Type")]
    MissingType { id: String },

    #[error("resource '{id}': Properties must be a JSON object")]
    PropertiesNotObject { id: String },

    #[error("resource '{id}', property '{property}': {source}")]
    Value {
        id: String,
        property: String,
        source: ValueError,
    },

    #[error("resource '{id}': invalid attributes: {source}")]
    Attributes {
        id: String,
        source: serde_json::Error,
    },
}

/// One validation finding, tied to a resource
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub logical_id: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.logical_id, self.message)
    }
}

impl Template {
    /// Parse a CloudFormation JSON template
    pub fn from_json(source: &str) -> Result<Template, TemplateError> {
        let json: Json = serde_json::from_str(source)?;
        let root = json.as_object().ok_or(TemplateError::NotAnObject)?;

        let description = root
            .get("Description")
            .and_then(|d| d.as_str())
            .map(|d| d.to_string());

        let parameters = section_keys(root.get("Parameters"));
        let conditions = section_keys(root.get("Conditions"));

        let resources_json = root
            .get("Resources")
            .and_then(|r| r.as_object())
            .filter(|r| !r.is_empty())
            .ok_or(TemplateError::MissingResources)?;

        let mut resources = HashMap::with_capacity(resources_json.len());
        for (id, resource_json) in resources_json {
            let obj = resource_json
                .as_object()
                .ok_or_else(|| TemplateError::ResourceNotObject { id: id.clone() })?;

            let type_name = obj
                .get("Type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| TemplateError::MissingType { id: id.clone() })?
                .to_string();

            let mut properties = HashMap::new();
            if let Some(props_json) = obj.get("Properties") {
                let props = props_json
                    .as_object()
                    .ok_or_else(|| TemplateError::PropertiesNotObject { id: id.clone() })?;
                for (name, value) in props {
                    let value = Value::from_json(value).map_err(|source| TemplateError::Value {
                        id: id.clone(),
                        property: name.clone(),
                        source,
                    })?;
                    properties.insert(name.clone(), value);
                }
            }

            // ResourceAttributes ignores Type and Properties keys
            let attributes: ResourceAttributes = serde_json::from_value(resource_json.clone())
                .map_err(|source| TemplateError::Attributes {
                    id: id.clone(),
                    source,
                })?;

            resources.insert(
                id.clone(),
                TemplateResource {
                    type_name,
                    properties,
                    attributes,
                },
            );
        }

        Ok(Template {
            description,
            parameters,
            conditions,
            resources,
        })
    }

    /// Validate every resource against the registry, collecting all findings
    pub fn validate(&self, registry: &SchemaRegistry) -> Result<(), Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();

        for (id, resource) in &self.resources {
            match registry.lookup(&resource.type_name) {
                None => diagnostics.push(Diagnostic {
                    logical_id: id.clone(),
                    message: format!("unknown resource type '{}'", resource.type_name),
                }),
                Some(schema) => {
                    if let Err(errors) = schema.validate(&resource.properties) {
                        for error in errors {
                            diagnostics.push(Diagnostic {
                                logical_id: id.clone(),
                                message: error.to_string(),
                            });
                        }
                    }
                }
            }

            self.check_references(id, resource, &mut diagnostics);
        }

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(diagnostics)
        }
    }

    fn check_references(
        &self,
        id: &str,
        resource: &TemplateResource,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for target in resource.attributes.depends_on_ids() {
            if !self.resources.contains_key(target) {
                diagnostics.push(Diagnostic {
                    logical_id: id.to_string(),
                    message: format!("DependsOn target '{}' is not declared", target),
                });
            }
        }

        if let Some(condition) = &resource.attributes.condition {
            if !self.conditions.iter().any(|c| c == condition) {
                diagnostics.push(Diagnostic {
                    logical_id: id.to_string(),
                    message: format!("condition '{}' is not declared", condition),
                });
            }
        }

        for value in resource.properties.values() {
            value.walk_intrinsics(&mut |intrinsic| {
                for target in intrinsic.referenced_logical_ids() {
                    let known = self.resources.contains_key(target)
                        || self.parameters.iter().any(|p| p == target);
                    if !known {
                        diagnostics.push(Diagnostic {
                            logical_id: id.to_string(),
                            message: format!(
                                "{} target '{}' is not a declared resource or parameter",
                                intrinsic.name(),
                                target
                            ),
                        });
                    }
                }
                if let Some(condition) = intrinsic.condition_name() {
                    if !self.conditions.iter().any(|c| c == condition) {
                        diagnostics.push(Diagnostic {
                            logical_id: id.to_string(),
                            message: format!("Fn::If condition '{}' is not declared", condition),
                        });
                    }
                }
            });
        }
    }
}

fn section_keys(section: Option<&Json>) -> Vec<String> {
    section
        .and_then(|s| s.as_object())
        .map(|s| s.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySchema, PropertyType, ResourceTypeSchema};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_schemas(vec![
            ResourceTypeSchema::new("AWS::Fake::Vpc")
                .property(PropertySchema::new("CidrBlock", PropertyType::String).required()),
            ResourceTypeSchema::new("AWS::Fake::Subnet")
                .property(PropertySchema::new("VpcId", PropertyType::String).required())
                .property(PropertySchema::new("CidrBlock", PropertyType::String)),
        ])
    }

    const VALID: &str = r#"{
        "Description": "two-resource network",
        "Resources": {
            "Vpc": {
                "Type": "AWS::Fake::Vpc",
                "Properties": {"CidrBlock": "10.0.0.0/16"}
            },
            "Subnet": {
                "Type": "AWS::Fake::Subnet",
                "DependsOn": "Vpc",
                "Properties": {
                    "VpcId": {"Ref": "Vpc"},
                    "CidrBlock": "10.0.1.0/24"
                }
            }
        }
    }"#;

    #[test]
    fn parse_and_validate_ok() {
        let template = Template::from_json(VALID).unwrap();
        assert_eq!(template.resources.len(), 2);
        assert_eq!(
            template.description.as_deref(),
            Some("two-resource network")
        );
        assert!(template.validate(&registry()).is_ok());
    }

    #[test]
    fn missing_resources_section() {
        assert!(matches!(
            Template::from_json(r#"{"Description": "empty"}"#),
            Err(TemplateError::MissingResources)
        ));
        assert!(matches!(
            Template::from_json(r#"{"Resources": {}}"#),
            Err(TemplateError::MissingResources)
        ));
    }

    #[test]
    fn missing_type_is_an_error() {
        let source = r#"{"Resources": {"X": {"Properties": {}}}}"#;
        assert!(matches!(
            Template::from_json(source),
            Err(TemplateError::MissingType { .. })
        ));
    }

    #[test]
    fn unknown_resource_type_diagnostic() {
        let source = r#"{"Resources": {"X": {"Type": "AWS::Fake::Nope"}}}"#;
        let template = Template::from_json(source).unwrap();
        let diagnostics = template.validate(&registry()).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("unknown resource type"));
    }

    #[test]
    fn dangling_ref_diagnostic() {
        let source = r#"{
            "Resources": {
                "Subnet": {
                    "Type": "AWS::Fake::Subnet",
                    "Properties": {"VpcId": {"Ref": "Missing"}}
                }
            }
        }"#;
        let template = Template::from_json(source).unwrap();
        let diagnostics = template.validate(&registry()).unwrap_err();
        assert!(
            diagnostics
                .iter()
                .any(|d| d.message.contains("'Missing'") && d.message.contains("Ref"))
        );
    }

    #[test]
    fn ref_to_parameter_is_allowed() {
        let source = r#"{
            "Parameters": {"VpcIdParam": {"Type": "String"}},
            "Resources": {
                "Subnet": {
                    "Type": "AWS::Fake::Subnet",
                    "Properties": {"VpcId": {"Ref": "VpcIdParam"}}
                }
            }
        }"#;
        let template = Template::from_json(source).unwrap();
        assert!(template.validate(&registry()).is_ok());
    }

    #[test]
    fn dangling_depends_on_diagnostic() {
        let source = r#"{
            "Resources": {
                "Vpc": {
                    "Type": "AWS::Fake::Vpc",
                    "DependsOn": ["Ghost"],
                    "Properties": {"CidrBlock": "10.0.0.0/16"}
                }
            }
        }"#;
        let template = Template::from_json(source).unwrap();
        let diagnostics = template.validate(&registry()).unwrap_err();
        assert!(diagnostics[0].message.contains("DependsOn target 'Ghost'"));
    }

    #[test]
    fn undeclared_condition_diagnostic() {
        let source = r#"{
            "Resources": {
                "Vpc": {
                    "Type": "AWS::Fake::Vpc",
                    "Condition": "IsProd",
                    "Properties": {"CidrBlock": "10.0.0.0/16"}
                }
            }
        }"#;
        let template = Template::from_json(source).unwrap();
        let diagnostics = template.validate(&registry()).unwrap_err();
        assert!(diagnostics[0].message.contains("condition 'IsProd'"));
    }
}
