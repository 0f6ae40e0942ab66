//! Value - Template property values and CloudFormation intrinsic functions
//!
//! Every leaf position in a CloudFormation template accepts either a literal
//! value or an intrinsic function call (`Ref`, `Fn::GetAtt`, ...). `Value`
//! carries both forms; intrinsics are held as opaque structured data and are
//! never evaluated.

use std::collections::HashMap;

use serde_json::Value as Json;

/// Pseudo parameters CloudFormation resolves without a template declaration
pub const PSEUDO_PARAMETERS: &[&str] = &[
    "AWS::AccountId",
    "AWS::NotificationARNs",
    "AWS::NoValue",
    "AWS::Partition",
    "AWS::Region",
    "AWS::StackId",
    "AWS::StackName",
    "AWS::URLSuffix",
];

/// Property value in a template
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    /// An intrinsic function call in place of a literal value
    Intrinsic(Box<Intrinsic>),
}

/// CloudFormation intrinsic function forms
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `{"Ref": "LogicalId"}`
    Ref(String),
    /// `{"Fn::GetAtt": ["LogicalId", "Attribute"]}` or the dotted-string form
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `{"Fn::Sub": "..."}` or `{"Fn::Sub": ["...", {vars}]}`
    Sub {
        template: String,
        variables: HashMap<String, Value>,
    },
    /// `{"Fn::Join": ["delim", [values]]}`
    Join {
        delimiter: String,
        values: Vec<Value>,
    },
    /// `{"Fn::Select": [index, values]}`
    Select { index: Box<Value>, values: Box<Value> },
    /// `{"Fn::Split": ["delim", source]}`
    Split {
        delimiter: String,
        source: Box<Value>,
    },
    /// `{"Fn::GetAZs": region}`
    GetAZs(Box<Value>),
    /// `{"Fn::ImportValue": name}`
    ImportValue(Box<Value>),
    /// `{"Fn::FindInMap": [map, top-level key, second-level key]}`
    FindInMap {
        map_name: Box<Value>,
        top_level_key: Box<Value>,
        second_level_key: Box<Value>,
    },
    /// `{"Fn::Base64": value}`
    Base64(Box<Value>),
    /// `{"Fn::Cidr": [ip block, count, cidr bits]}`
    Cidr {
        ip_block: Box<Value>,
        count: Box<Value>,
        cidr_bits: Box<Value>,
    },
    /// `{"Fn::If": ["ConditionName", value-if-true, value-if-false]}`
    If {
        condition: String,
        if_true: Box<Value>,
        if_false: Box<Value>,
    },
}

/// Value conversion error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValueError {
    #[error("null is not a valid property value")]
    Null,

    #[error("unknown intrinsic function '{0}'")]
    UnknownIntrinsic(String),

    #[error("malformed {name} intrinsic: {reason}")]
    MalformedIntrinsic { name: String, reason: String },
}

impl ValueError {
    fn malformed(name: &str, reason: impl Into<String>) -> Self {
        ValueError::MalformedIntrinsic {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl Value {
    /// Convert template JSON into a `Value`, detecting intrinsic-function
    /// objects (a single-key object named `Ref` or `Fn::*`).
    pub fn from_json(json: &Json) -> Result<Value, ValueError> {
        match json {
            Json::Null => Err(ValueError::Null),
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or_default())),
            Json::String(s) => Ok(Value::String(s.clone())),
            Json::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(Value::from_json(item)?);
                }
                Ok(Value::List(values))
            }
            Json::Object(fields) => {
                if fields.len() == 1 {
                    if let Some((key, payload)) = fields.iter().next() {
                        if key == "Ref" || key.starts_with("Fn::") {
                            return Ok(Value::Intrinsic(Box::new(Intrinsic::from_json(
                                key, payload,
                            )?)));
                        }
                    }
                }
                let mut map = HashMap::with_capacity(fields.len());
                for (key, value) in fields {
                    map.insert(key.clone(), Value::from_json(value)?);
                }
                Ok(Value::Map(map))
            }
        }
    }

    /// Type name for diagnostics
    pub fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Number(_) => "Number".to_string(),
            Value::Bool(_) => "Boolean".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Map(_) => "Map".to_string(),
            Value::Intrinsic(i) => format!("Intrinsic({})", i.name()),
        }
    }

    /// Visit every intrinsic reachable from this value, including intrinsics
    /// nested inside other intrinsics' arguments.
    pub fn walk_intrinsics<'a>(&'a self, visit: &mut dyn FnMut(&'a Intrinsic)) {
        match self {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
            Value::List(items) => {
                for item in items {
                    item.walk_intrinsics(visit);
                }
            }
            Value::Map(map) => {
                for value in map.values() {
                    value.walk_intrinsics(visit);
                }
            }
            Value::Intrinsic(intrinsic) => {
                visit(intrinsic);
                intrinsic.walk_arguments(visit);
            }
        }
    }
}

impl Intrinsic {
    /// Parse one intrinsic from its JSON key/payload pair
    pub fn from_json(name: &str, payload: &Json) -> Result<Intrinsic, ValueError> {
        match name {
            "Ref" => match payload {
                Json::String(s) => Ok(Intrinsic::Ref(s.clone())),
                _ => Err(ValueError::malformed(name, "expected a string")),
            },
            "Fn::GetAtt" => Self::parse_get_att(payload),
            "Fn::Sub" => Self::parse_sub(payload),
            "Fn::Join" => Self::parse_join(payload),
            "Fn::Select" => {
                let items = expect_array(name, payload, 2)?;
                Ok(Intrinsic::Select {
                    index: Box::new(Value::from_json(&items[0])?),
                    values: Box::new(Value::from_json(&items[1])?),
                })
            }
            "Fn::Split" => {
                let items = expect_array(name, payload, 2)?;
                let delimiter = items[0]
                    .as_str()
                    .ok_or_else(|| ValueError::malformed(name, "delimiter must be a string"))?;
                Ok(Intrinsic::Split {
                    delimiter: delimiter.to_string(),
                    source: Box::new(Value::from_json(&items[1])?),
                })
            }
            "Fn::GetAZs" => Ok(Intrinsic::GetAZs(Box::new(Value::from_json(payload)?))),
            "Fn::ImportValue" => Ok(Intrinsic::ImportValue(Box::new(Value::from_json(payload)?))),
            "Fn::FindInMap" => {
                let items = expect_array(name, payload, 3)?;
                Ok(Intrinsic::FindInMap {
                    map_name: Box::new(Value::from_json(&items[0])?),
                    top_level_key: Box::new(Value::from_json(&items[1])?),
                    second_level_key: Box::new(Value::from_json(&items[2])?),
                })
            }
            "Fn::Base64" => Ok(Intrinsic::Base64(Box::new(Value::from_json(payload)?))),
            "Fn::Cidr" => {
                let items = expect_array(name, payload, 3)?;
                Ok(Intrinsic::Cidr {
                    ip_block: Box::new(Value::from_json(&items[0])?),
                    count: Box::new(Value::from_json(&items[1])?),
                    cidr_bits: Box::new(Value::from_json(&items[2])?),
                })
            }
            "Fn::If" => {
                let items = expect_array(name, payload, 3)?;
                let condition = items[0]
                    .as_str()
                    .ok_or_else(|| ValueError::malformed(name, "condition name must be a string"))?;
                Ok(Intrinsic::If {
                    condition: condition.to_string(),
                    if_true: Box::new(Value::from_json(&items[1])?),
                    if_false: Box::new(Value::from_json(&items[2])?),
                })
            }
            other => Err(ValueError::UnknownIntrinsic(other.to_string())),
        }
    }

    fn parse_get_att(payload: &Json) -> Result<Intrinsic, ValueError> {
        match payload {
            // ["LogicalId", "Attribute"] - attribute may itself contain dots
            Json::Array(items) if items.len() == 2 => {
                let logical_id = items[0].as_str().ok_or_else(|| {
                    ValueError::malformed("Fn::GetAtt", "logical ID must be a string")
                })?;
                let attribute = items[1].as_str().ok_or_else(|| {
                    ValueError::malformed("Fn::GetAtt", "attribute name must be a string")
                })?;
                Ok(Intrinsic::GetAtt {
                    logical_id: logical_id.to_string(),
                    attribute: attribute.to_string(),
                })
            }
            // "LogicalId.Attribute" shorthand
            Json::String(s) => {
                let mut parts = s.splitn(2, '.');
                match (parts.next(), parts.next()) {
                    (Some(logical_id), Some(attribute)) if !logical_id.is_empty() => {
                        Ok(Intrinsic::GetAtt {
                            logical_id: logical_id.to_string(),
                            attribute: attribute.to_string(),
                        })
                    }
                    _ => Err(ValueError::malformed(
                        "Fn::GetAtt",
                        format!("expected 'LogicalId.Attribute', got '{}'", s),
                    )),
                }
            }
            _ => Err(ValueError::malformed(
                "Fn::GetAtt",
                "expected a two-element array or a dotted string",
            )),
        }
    }

    fn parse_sub(payload: &Json) -> Result<Intrinsic, ValueError> {
        match payload {
            Json::String(s) => Ok(Intrinsic::Sub {
                template: s.clone(),
                variables: HashMap::new(),
            }),
            Json::Array(items) if items.len() == 2 => {
                let template = items[0]
                    .as_str()
                    .ok_or_else(|| ValueError::malformed("Fn::Sub", "template must be a string"))?;
                let vars = items[1]
                    .as_object()
                    .ok_or_else(|| ValueError::malformed("Fn::Sub", "variables must be an object"))?;
                let mut variables = HashMap::with_capacity(vars.len());
                for (key, value) in vars {
                    variables.insert(key.clone(), Value::from_json(value)?);
                }
                Ok(Intrinsic::Sub {
                    template: template.to_string(),
                    variables,
                })
            }
            _ => Err(ValueError::malformed(
                "Fn::Sub",
                "expected a string or a [template, variables] pair",
            )),
        }
    }

    /// JSON key for this intrinsic
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } => "Fn::GetAtt",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::GetAZs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::If { .. } => "Fn::If",
        }
    }

    fn parse_join(payload: &Json) -> Result<Intrinsic, ValueError> {
        let items = expect_array("Fn::Join", payload, 2)?;
        let delimiter = items[0]
            .as_str()
            .ok_or_else(|| ValueError::malformed("Fn::Join", "delimiter must be a string"))?;
        let list = items[1]
            .as_array()
            .ok_or_else(|| ValueError::malformed("Fn::Join", "second argument must be a list"))?;
        let mut values = Vec::with_capacity(list.len());
        for item in list {
            values.push(Value::from_json(item)?);
        }
        Ok(Intrinsic::Join {
            delimiter: delimiter.to_string(),
            values,
        })
    }

    /// Logical IDs this intrinsic refers to directly (pseudo parameters
    /// excluded). Nested intrinsics are reached via `Value::walk_intrinsics`.
    pub fn referenced_logical_ids(&self) -> Vec<&str> {
        match self {
            Intrinsic::Ref(target) if !PSEUDO_PARAMETERS.contains(&target.as_str()) => {
                vec![target.as_str()]
            }
            Intrinsic::Ref(_) => Vec::new(),
            Intrinsic::GetAtt { logical_id, .. } => vec![logical_id.as_str()],
            Intrinsic::Sub {
                template,
                variables,
            } => sub_references(template, variables),
            _ => Vec::new(),
        }
    }

    /// Condition name this intrinsic depends on, if any
    pub fn condition_name(&self) -> Option<&str> {
        match self {
            Intrinsic::If { condition, .. } => Some(condition.as_str()),
            _ => None,
        }
    }

    fn walk_arguments<'a>(&'a self, visit: &mut dyn FnMut(&'a Intrinsic)) {
        match self {
            Intrinsic::Ref(_) | Intrinsic::GetAtt { .. } => {}
            Intrinsic::Sub { variables, .. } => {
                for value in variables.values() {
                    value.walk_intrinsics(visit);
                }
            }
            Intrinsic::Join { values, .. } => {
                for value in values {
                    value.walk_intrinsics(visit);
                }
            }
            Intrinsic::Select { index, values } => {
                index.walk_intrinsics(visit);
                values.walk_intrinsics(visit);
            }
            Intrinsic::Split { source, .. } => source.walk_intrinsics(visit),
            Intrinsic::GetAZs(region) => region.walk_intrinsics(visit),
            Intrinsic::ImportValue(name) => name.walk_intrinsics(visit),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => {
                map_name.walk_intrinsics(visit);
                top_level_key.walk_intrinsics(visit);
                second_level_key.walk_intrinsics(visit);
            }
            Intrinsic::Base64(value) => value.walk_intrinsics(visit),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => {
                ip_block.walk_intrinsics(visit);
                count.walk_intrinsics(visit);
                cidr_bits.walk_intrinsics(visit);
            }
            Intrinsic::If {
                if_true, if_false, ..
            } => {
                if_true.walk_intrinsics(visit);
                if_false.walk_intrinsics(visit);
            }
        }
    }
}

fn expect_array<'a>(
    name: &str,
    payload: &'a Json,
    len: usize,
) -> Result<&'a Vec<Json>, ValueError> {
    match payload {
        Json::Array(items) if items.len() == len => Ok(items),
        Json::Array(items) => Err(ValueError::malformed(
            name,
            format!("expected {} arguments, got {}", len, items.len()),
        )),
        _ => Err(ValueError::malformed(name, "expected an array")),
    }
}

/// Extract `${...}` references from an Fn::Sub template string.
/// `${!literal}` escapes are skipped, as are names bound in the variables
/// map and pseudo parameters. A dotted reference is a GetAtt on the part
/// before the first dot.
fn sub_references<'a>(template: &'a str, variables: &HashMap<String, Value>) -> Vec<&'a str> {
    let mut refs = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        rest = &rest[start + 2..];
        let Some(end) = rest.find('}') else { break };
        let token = &rest[..end];
        rest = &rest[end + 1..];
        if token.starts_with('!') {
            continue;
        }
        let target = token.split('.').next().unwrap_or(token);
        if variables.contains_key(token)
            || PSEUDO_PARAMETERS.contains(&token)
            || target.is_empty()
        {
            continue;
        }
        refs.push(target);
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_values_from_json() {
        assert_eq!(
            Value::from_json(&json!("hello")).unwrap(),
            Value::String("hello".to_string())
        );
        assert_eq!(Value::from_json(&json!(42)).unwrap(), Value::Number(42.0));
        assert_eq!(Value::from_json(&json!(true)).unwrap(), Value::Bool(true));
        assert!(Value::from_json(&json!(null)).is_err());
    }

    #[test]
    fn ref_from_json() {
        let value = Value::from_json(&json!({"Ref": "MyVpc"})).unwrap();
        assert_eq!(
            value,
            Value::Intrinsic(Box::new(Intrinsic::Ref("MyVpc".to_string())))
        );
    }

    #[test]
    fn get_att_array_and_dotted_forms() {
        let from_array = Value::from_json(&json!({"Fn::GetAtt": ["MyVpc", "CidrBlock"]})).unwrap();
        let from_string = Value::from_json(&json!({"Fn::GetAtt": "MyVpc.CidrBlock"})).unwrap();
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn get_att_nested_attribute_keeps_dots() {
        let value = Value::from_json(&json!({"Fn::GetAtt": "Db.Endpoint.Address"})).unwrap();
        let Value::Intrinsic(intrinsic) = value else {
            panic!("expected intrinsic");
        };
        assert_eq!(
            *intrinsic,
            Intrinsic::GetAtt {
                logical_id: "Db".to_string(),
                attribute: "Endpoint.Address".to_string(),
            }
        );
    }

    #[test]
    fn sub_with_variables() {
        let value = Value::from_json(
            &json!({"Fn::Sub": ["${Prefix}-${AWS::Region}", {"Prefix": "app"}]}),
        )
        .unwrap();
        let Value::Intrinsic(intrinsic) = value else {
            panic!("expected intrinsic");
        };
        // Prefix is bound, AWS::Region is a pseudo parameter
        assert!(intrinsic.referenced_logical_ids().is_empty());
    }

    #[test]
    fn sub_references_logical_ids() {
        let intrinsic =
            Intrinsic::from_json("Fn::Sub", &json!("${Bucket.Arn}/${Key} ${!NotARef}")).unwrap();
        assert_eq!(intrinsic.referenced_logical_ids(), vec!["Bucket", "Key"]);
    }

    #[test]
    fn unknown_intrinsic_is_rejected() {
        let result = Value::from_json(&json!({"Fn::Bogus": "x"}));
        assert!(matches!(result, Err(ValueError::UnknownIntrinsic(_))));
    }

    #[test]
    fn single_key_plain_object_is_a_map() {
        let value = Value::from_json(&json!({"Key": "Name"})).unwrap();
        assert!(matches!(value, Value::Map(_)));
    }

    #[test]
    fn malformed_join_is_rejected() {
        assert!(Value::from_json(&json!({"Fn::Join": ["-"]})).is_err());
        assert!(Value::from_json(&json!({"Fn::Join": [7, []]})).is_err());
    }

    #[test]
    fn walk_finds_nested_intrinsics() {
        let value = Value::from_json(&json!({
            "Fn::Join": ["/", [{"Ref": "Bucket"}, {"Fn::GetAtt": ["Fn1", "Arn"]}]]
        }))
        .unwrap();
        let mut seen = Vec::new();
        value.walk_intrinsics(&mut |i| seen.push(i.name()));
        assert_eq!(seen, vec!["Fn::Join", "Ref", "Fn::GetAtt"]);
    }

    #[test]
    fn pseudo_parameter_ref_has_no_logical_id() {
        let intrinsic = Intrinsic::Ref("AWS::Region".to_string());
        assert!(intrinsic.referenced_logical_ids().is_empty());
    }
}
