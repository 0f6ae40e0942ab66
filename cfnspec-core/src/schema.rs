//! Schema - Type schemas for CloudFormation resource types
//!
//! Each resource type declares a set of property schemas plus the named
//! property bags (nested structures) those properties reference. Validation
//! is structural: required-field presence and type shape. Documented value
//! constraints (patterns, lengths, ranges, allowed values) are carried as
//! metadata only and are never enforced.

use std::collections::HashMap;
use std::fmt;

use crate::value::Value;

/// Property type
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
    /// String
    String,
    /// Integer, Long or Double - CloudFormation does not distinguish
    Number,
    /// Boolean
    Boolean,
    /// Free-form JSON (policy documents and the like)
    Json,
    /// Array of a type
    List(Box<PropertyType>),
    /// String-keyed map of a type (AWS "Object of X")
    Map(Box<PropertyType>),
    /// Reference to a property bag defined in the same resource schema
    Named(String),
}

impl PropertyType {
    /// Check that a value conforms to this type.
    ///
    /// An intrinsic function is accepted in any position: every leaf is
    /// `T | Intrinsic`, never `T` alone.
    pub fn validate(
        &self,
        value: &Value,
        bags: &HashMap<String, PropertyBagSchema>,
    ) -> Result<(), TypeError> {
        if let Value::Intrinsic(_) = value {
            return Ok(());
        }
        match (self, value) {
            (PropertyType::String, Value::String(_)) => Ok(()),
            (PropertyType::Number, Value::Number(_)) => Ok(()),
            (PropertyType::Boolean, Value::Bool(_)) => Ok(()),
            (PropertyType::Json, _) => Ok(()),

            (PropertyType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item, bags).map_err(|e| TypeError::ListItem {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (PropertyType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v, bags).map_err(|e| TypeError::MapValue {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (PropertyType::Named(name), Value::Map(fields)) => {
                let bag = bags
                    .get(name)
                    .ok_or_else(|| TypeError::DanglingReference { name: name.clone() })?;
                bag.validate(fields, bags).map_err(|e| TypeError::InBag {
                    bag: name.clone(),
                    inner: Box::new(e),
                })
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            PropertyType::String => "String".to_string(),
            PropertyType::Number => "Number".to_string(),
            PropertyType::Boolean => "Boolean".to_string(),
            PropertyType::Json => "Json".to_string(),
            PropertyType::List(inner) => format!("List<{}>", inner.type_name()),
            PropertyType::Map(inner) => format!("Map<{}>", inner.type_name()),
            PropertyType::Named(name) => name.clone(),
        }
    }

    /// Property bag names this type refers to, at any nesting depth
    fn named_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            PropertyType::Named(name) => out.push(name),
            PropertyType::List(inner) | PropertyType::Map(inner) => inner.named_references(out),
            _ => {}
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("required property '{name}' is missing")]
    MissingRequired { name: String },

    #[error("unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("reference to undefined property type '{name}'")]
    DanglingReference { name: String },

    #[error("list item at index {index}: {inner}")]
    ListItem { index: usize, inner: Box<TypeError> },

    #[error("map value for key '{key}': {inner}")]
    MapValue { key: String, inner: Box<TypeError> },

    #[error("property '{name}': {inner}")]
    Property { name: String, inner: Box<TypeError> },

    #[error("in {bag}: {inner}")]
    InBag { bag: String, inner: Box<TypeError> },
}

/// How CloudFormation applies an update to a property (documented behavior)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateType {
    /// Update in place
    #[default]
    Mutable,
    /// Update requires replacement of the resource
    Immutable,
    /// Replacement depends on the values involved
    Conditional,
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UpdateType::Mutable => "Mutable",
            UpdateType::Immutable => "Immutable",
            UpdateType::Conditional => "Conditional",
        };
        write!(f, "{}", s)
    }
}

/// Documented value constraints. Informational only - validation never
/// enforces these, matching AWS's schema reference where they appear in
/// documentation rather than the type system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub allowed_values: Vec<String>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    pub fn with_maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    pub fn with_allowed_values(mut self, values: &[&str]) -> Self {
        self.allowed_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
            && self.allowed_values.is_empty()
    }
}

/// Property schema
#[derive(Debug, Clone)]
pub struct PropertySchema {
    pub name: String,
    pub prop_type: PropertyType,
    pub required: bool,
    pub description: Option<String>,
    pub update_type: UpdateType,
    pub constraints: Constraints,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, prop_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            prop_type,
            required: false,
            description: None,
            update_type: UpdateType::default(),
            constraints: Constraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_update_type(mut self, update_type: UpdateType) -> Self {
        self.update_type = update_type;
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

/// A named nested structure (e.g. `Tag`, `VpcConfig`, `S3Location`).
///
/// Bags are defined per resource schema and never shared across modules:
/// AWS publishes them independently per resource, and their documented
/// constraints can differ between otherwise identical-looking bags.
#[derive(Debug, Clone)]
pub struct PropertyBagSchema {
    pub name: String,
    pub properties: HashMap<String, PropertySchema>,
}

impl PropertyBagSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn property(mut self, schema: PropertySchema) -> Self {
        self.properties.insert(schema.name.clone(), schema);
        self
    }

    /// Validate one instance of this bag. Stops at the first error so the
    /// caller can attach path context.
    fn validate(
        &self,
        fields: &HashMap<String, Value>,
        bags: &HashMap<String, PropertyBagSchema>,
    ) -> Result<(), TypeError> {
        for (name, schema) in &self.properties {
            if schema.required && !fields.contains_key(name) {
                return Err(TypeError::MissingRequired { name: name.clone() });
            }
        }
        for (name, value) in fields {
            let Some(schema) = self.properties.get(name) else {
                return Err(TypeError::UnknownProperty { name: name.clone() });
            };
            schema
                .prop_type
                .validate(value, bags)
                .map_err(|e| TypeError::Property {
                    name: name.clone(),
                    inner: Box::new(e),
                })?;
        }
        Ok(())
    }
}

/// Resource type schema
///
/// `type_name` is the literal CloudFormation discriminant, e.g.
/// `"AWS::EC2::SecurityGroup"`.
#[derive(Debug, Clone)]
pub struct ResourceTypeSchema {
    pub type_name: String,
    pub description: Option<String>,
    /// Link into AWS's CloudFormation User Guide
    pub documentation: Option<String>,
    pub properties: HashMap<String, PropertySchema>,
    pub property_bags: HashMap<String, PropertyBagSchema>,
}

impl ResourceTypeSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
            documentation: None,
            properties: HashMap::new(),
            property_bags: HashMap::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_documentation(mut self, url: impl Into<String>) -> Self {
        self.documentation = Some(url.into());
        self
    }

    pub fn property(mut self, schema: PropertySchema) -> Self {
        self.properties.insert(schema.name.clone(), schema);
        self
    }

    pub fn property_bag(mut self, bag: PropertyBagSchema) -> Self {
        self.property_bags.insert(bag.name.clone(), bag);
        self
    }

    /// Service portion of the type name ("EC2" in "AWS::EC2::SecurityGroup")
    pub fn service(&self) -> &str {
        self.type_name.split("::").nth(1).unwrap_or("")
    }

    /// Resource portion of the type name ("SecurityGroup")
    pub fn resource(&self) -> &str {
        self.type_name.split("::").nth(2).unwrap_or("")
    }

    /// Validate a `Properties` block against this schema, collecting all
    /// errors. Unknown properties are rejected - CloudFormation does not
    /// accept keys outside the published schema.
    pub fn validate(&self, properties: &HashMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for (name, schema) in &self.properties {
            if schema.required && !properties.contains_key(name) {
                errors.push(TypeError::MissingRequired { name: name.clone() });
            }
        }

        for (name, value) in properties {
            match self.properties.get(name) {
                None => errors.push(TypeError::UnknownProperty { name: name.clone() }),
                Some(schema) => {
                    if let Err(e) = schema.prop_type.validate(value, &self.property_bags) {
                        errors.push(TypeError::Property {
                            name: name.clone(),
                            inner: Box::new(e),
                        });
                    }
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Check that every `Named` reference in this schema (on resource
    /// properties and inside bags, at any list/map depth) resolves to a bag
    /// defined in this schema.
    pub fn check_integrity(&self) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        let mut refs: Vec<&str> = Vec::new();

        for schema in self.properties.values() {
            schema.prop_type.named_references(&mut refs);
        }
        for bag in self.property_bags.values() {
            for schema in bag.properties.values() {
                schema.prop_type.named_references(&mut refs);
            }
        }

        for name in refs {
            if !self.property_bags.contains_key(name) {
                errors.push(TypeError::DanglingReference {
                    name: name.to_string(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Lookup table over a set of resource type schemas, keyed by type name
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ResourceTypeSchema>,
}

impl SchemaRegistry {
    pub fn from_schemas(schemas: Vec<ResourceTypeSchema>) -> Self {
        let mut map = HashMap::with_capacity(schemas.len());
        for schema in schemas {
            map.insert(schema.type_name.clone(), schema);
        }
        Self { schemas: map }
    }

    pub fn lookup(&self, type_name: &str) -> Option<&ResourceTypeSchema> {
        self.schemas.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceTypeSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
