//! CloudFormation Resource Provider Schema to cfnspec Module Generator
//!
//! This tool generates Rust schema modules for cfnspec-aws from AWS
//! CloudFormation resource provider schemas.
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type \
//!     --type RESOURCE --type-name AWS::SQS::Queue --query 'Schema' --output text | \
//!     cfnspec-codegen --type-name AWS::SQS::Queue
//!
//!   # Generate from file
//!   cfnspec-codegen --file schema.json --type-name AWS::SQS::Queue
//!
//!   # Check a committed module for drift against the provider schema
//!   cfnspec-codegen --file schema.json --type-name AWS::SQS::Queue \
//!     --check cfnspec-aws/src/sqs/queue.rs

use anyhow::{Context, Result};
use clap::Parser;
use heck::ToSnakeCase;
use serde::Deserialize;
use serde_json::{Map, Value as Json};
use similar::TextDiff;
use std::collections::HashSet;
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "cfnspec-codegen")]
#[command(about = "Generate cfnspec schema modules from CloudFormation schemas")]
struct Args {
    /// CloudFormation type name (e.g., AWS::SQS::Queue)
    #[arg(long)]
    type_name: String,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,

    /// Compare generated code against a committed module instead of writing.
    /// Exits nonzero and prints a diff when the module has drifted.
    #[arg(long, conflicts_with = "output")]
    check: Option<String>,
}

/// CloudFormation Resource Provider Schema.
///
/// `properties` and `definitions` stay as ordered JSON maps (serde_json's
/// preserve_order feature): emitted modules follow the provider schema's own
/// ordering, which is what makes `--check` against a committed module work.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnSchema {
    type_name: String,
    description: Option<String>,
    properties: Map<String, Json>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    read_only_properties: Vec<String>,
    #[serde(default)]
    create_only_properties: Vec<String>,
    #[serde(default)]
    definitions: Map<String, Json>,
    documentation_url: Option<String>,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }
}

/// `additionalProperties` is either a bool or a nested schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<CfnProperty>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnProperty {
    #[serde(rename = "type")]
    prop_type: Option<TypeValue>,
    description: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<String>>,
    items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    additional_properties: Option<AdditionalProperties>,
    pattern_properties: Option<Map<String, Json>>,
    pattern: Option<String>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnDefinition {
    properties: Option<Map<String, Json>>,
    #[serde(default)]
    required: Vec<String>,
}

/// One property bag to emit, in schema order
struct BagSpec {
    name: String,
    required: HashSet<String>,
    properties: Vec<(String, CfnProperty)>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let schema: CfnSchema =
        serde_json::from_str(&schema_json).context("Failed to parse CloudFormation schema")?;

    let code = generate_module(&schema, &args.type_name)?;

    if let Some(check_path) = &args.check {
        let committed = std::fs::read_to_string(check_path)
            .with_context(|| format!("Failed to read module: {}", check_path))?;
        let committed_region = generated_region(&committed);
        if normalized(committed_region) == normalized(&code) {
            eprintln!("Up to date: {}", check_path);
            return Ok(());
        }
        let diff = TextDiff::from_lines(committed_region, code.as_str());
        print!("{}", diff.unified_diff().header(check_path, "generated"));
        std::process::exit(1);
    }

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// The part of a committed module that the generator owns. Committed modules
/// keep a hand-maintained test module below the generated code; it is not
/// part of the drift comparison.
fn generated_region(committed: &str) -> &str {
    match committed.find("#[cfg(test)]") {
        Some(idx) => &committed[..idx],
        None => committed,
    }
}

/// Collapse formatting so rustfmt rewrapping is not drift: whitespace is
/// dropped and the trailing commas rustfmt adds before a closing bracket are
/// removed.
fn normalized(code: &str) -> String {
    let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace(",)", ")").replace(",]", "]")
}

fn parse_properties(map: &Map<String, Json>) -> Result<Vec<(String, CfnProperty)>> {
    let mut properties = Vec::with_capacity(map.len());
    for (name, value) in map {
        let prop: CfnProperty = serde_json::from_value(value.clone())
            .with_context(|| format!("Invalid schema for property '{}'", name))?;
        properties.push((name.clone(), prop));
    }
    Ok(properties)
}

fn generate_module(schema: &CfnSchema, type_name: &str) -> Result<String> {
    if schema.type_name != type_name {
        anyhow::bail!(
            "Schema declares {} but --type-name is {}",
            schema.type_name,
            type_name
        );
    }

    // Parse type name: AWS::SQS::Queue -> (sqs, queue)
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 {
        anyhow::bail!("Invalid type name format: {}", type_name);
    }
    let resource = parts[2].to_snake_case();

    let read_only: HashSet<String> = schema
        .read_only_properties
        .iter()
        .map(|p| p.trim_start_matches("/properties/").to_string())
        .collect();
    let create_only: HashSet<String> = schema
        .create_only_properties
        .iter()
        .map(|p| p.trim_start_matches("/properties/").to_string())
        .collect();
    let required: HashSet<&str> = schema.required.iter().map(|s| s.as_str()).collect();

    let mut bags = Vec::with_capacity(schema.definitions.len());
    for (name, value) in &schema.definitions {
        let def: CfnDefinition = serde_json::from_value(value.clone())
            .with_context(|| format!("Invalid definition '{}'", name))?;
        let properties = match &def.properties {
            Some(props) => parse_properties(props)?,
            None => Vec::new(),
        };
        bags.push(BagSpec {
            name: name.clone(),
            required: def.required.into_iter().collect(),
            properties,
        });
    }
    let properties = parse_properties(&schema.properties)?;

    // Pre-scan to decide which imports the emitted module needs. Read-only
    // properties never reach the output, so they don't count.
    let mut uses_constraints = properties
        .iter()
        .filter(|(name, _)| !read_only.contains(name.as_str()))
        .any(|(_, prop)| has_constraints(prop));
    uses_constraints |= bags
        .iter()
        .flat_map(|bag| bag.properties.iter())
        .any(|(_, prop)| has_constraints(prop));
    let uses_update_type = properties
        .iter()
        .any(|(name, _)| create_only.contains(name.as_str()) && !read_only.contains(name.as_str()));

    let mut imports = vec!["PropertyBagSchema", "PropertySchema", "PropertyType", "ResourceTypeSchema"];
    if uses_constraints {
        imports.insert(0, "Constraints");
    }
    if uses_update_type {
        imports.push("UpdateType");
    }

    let mut code = String::new();
    code.push_str(&format!(
        r#"//! {} schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{{
    {},
}};
"#,
        resource,
        type_name,
        imports.join(", ")
    ));

    // Bag constructors, one per definition, in schema order
    for bag in &bags {
        code.push('\n');
        code.push_str(&generate_bag(bag, type_name, &schema.definitions)?);
    }

    // Resource schema constructor
    code.push('\n');
    code.push_str(&format!(
        "/// Returns the schema for {}\npub fn {}_schema() -> ResourceTypeSchema {{\n    ResourceTypeSchema::new(\"{}\")\n",
        type_name, resource, type_name
    ));
    if let Some(desc) = &schema.description {
        code.push_str(&format!(
            "        .with_description(\"{}\")\n",
            escape(desc, 200)
        ));
    }
    if let Some(url) = &schema.documentation_url {
        code.push_str(&format!("        .with_documentation(\"{}\")\n", url));
    }
    for bag in &bags {
        code.push_str(&format!(
            "        .property_bag({}_bag())\n",
            bag.name.to_snake_case()
        ));
    }

    for (name, prop) in &properties {
        // Read-only properties are attributes of the deployed resource, not
        // template inputs
        if read_only.contains(name.as_str()) {
            continue;
        }
        code.push_str(&generate_property(
            name,
            prop,
            required.contains(name.as_str()),
            create_only.contains(name.as_str()),
            &schema.definitions,
            "        ",
        )?);
    }

    code.push_str("}\n");
    Ok(code)
}

fn generate_bag(
    bag: &BagSpec,
    type_name: &str,
    definitions: &Map<String, Json>,
) -> Result<String> {
    let mut code = format!(
        "/// The `{}` property type for {}\nfn {}_bag() -> PropertyBagSchema {{\n    PropertyBagSchema::new(\"{}\")\n",
        bag.name,
        type_name,
        bag.name.to_snake_case(),
        bag.name
    );

    for (name, prop) in &bag.properties {
        code.push_str(&generate_property(
            name,
            prop,
            bag.required.contains(name),
            false,
            definitions,
            "        ",
        )?);
    }

    code.push_str("}\n");
    Ok(code)
}

fn generate_property(
    name: &str,
    prop: &CfnProperty,
    is_required: bool,
    is_create_only: bool,
    definitions: &Map<String, Json>,
    indent: &str,
) -> Result<String> {
    let prop_type = cfn_type(prop, definitions)
        .with_context(|| format!("In property '{}'", name))?;

    let mut code = format!(
        "{indent}.property(\n{indent}    PropertySchema::new(\"{}\", {})",
        name, prop_type
    );
    if is_required {
        code.push_str(&format!("\n{indent}        .required()"));
    }
    if is_create_only {
        code.push_str(&format!(
            "\n{indent}        .with_update_type(UpdateType::Immutable)"
        ));
    }
    if has_constraints(prop) {
        code.push_str(&format!(
            "\n{indent}        .with_constraints({})",
            render_constraints(prop)
        ));
    }
    if let Some(desc) = &prop.description {
        code.push_str(&format!(
            "\n{indent}        .with_description(\"{}\")",
            escape(desc, 150)
        ));
    }
    code.push_str(&format!(",\n{indent})\n"));
    Ok(code)
}

/// Map a provider schema property to a `PropertyType` expression.
///
/// A `$ref` that does not resolve to a definition in the same schema is a
/// hard error: emitting a silently-wrong type would defeat validation.
fn cfn_type(prop: &CfnProperty, definitions: &Map<String, Json>) -> Result<String> {
    if let Some(ref_path) = &prop.ref_path {
        let def_name = ref_path
            .strip_prefix("#/definitions/")
            .with_context(|| format!("Unsupported $ref path: {}", ref_path))?;
        if !definitions.contains_key(def_name) {
            anyhow::bail!("$ref to undefined definition: {}", ref_path);
        }
        return Ok(format!(
            "PropertyType::Named(\"{}\".to_string())",
            def_name
        ));
    }

    match prop.prop_type.as_ref().and_then(|t| t.as_str()) {
        Some("string") => Ok("PropertyType::String".to_string()),
        Some("boolean") => Ok("PropertyType::Boolean".to_string()),
        Some("integer") | Some("number") => Ok("PropertyType::Number".to_string()),
        Some("array") => {
            let item_type = match &prop.items {
                Some(items) => cfn_type(items, definitions).context("In array items")?,
                None => "PropertyType::String".to_string(),
            };
            Ok(format!("PropertyType::List(Box::new({}))", item_type))
        }
        Some("object") => {
            // An object with a typed additionalProperties/patternProperties
            // is a map; anything else is free-form JSON (policy documents)
            if let Some(AdditionalProperties::Schema(inner)) = &prop.additional_properties {
                let value_type = cfn_type(inner, definitions).context("In map values")?;
                return Ok(format!("PropertyType::Map(Box::new({}))", value_type));
            }
            if let Some(patterns) = &prop.pattern_properties {
                if let Some(first) = patterns.values().next() {
                    let inner: CfnProperty = serde_json::from_value(first.clone())
                        .context("Invalid patternProperties value schema")?;
                    let value_type = cfn_type(&inner, definitions).context("In map values")?;
                    return Ok(format!("PropertyType::Map(Box::new({}))", value_type));
                }
            }
            Ok("PropertyType::Json".to_string())
        }
        _ => Ok("PropertyType::Json".to_string()),
    }
}

fn has_constraints(prop: &CfnProperty) -> bool {
    prop.pattern.is_some()
        || prop.min_length.is_some()
        || prop.max_length.is_some()
        || prop.minimum.is_some()
        || prop.maximum.is_some()
        || prop.enum_values.as_ref().is_some_and(|v| !v.is_empty())
}

fn render_constraints(prop: &CfnProperty) -> String {
    let mut code = "Constraints::new()".to_string();
    if let Some(pattern) = &prop.pattern {
        code.push_str(&format!(".with_pattern(\"{}\")", escape(pattern, usize::MAX)));
    }
    if let Some(min) = prop.min_length {
        code.push_str(&format!(".with_min_length({})", min));
    }
    if let Some(max) = prop.max_length {
        code.push_str(&format!(".with_max_length({})", max));
    }
    if let Some(min) = prop.minimum {
        code.push_str(&format!(".with_minimum({:?})", min));
    }
    if let Some(max) = prop.maximum {
        code.push_str(&format!(".with_maximum({:?})", max));
    }
    if let Some(values) = &prop.enum_values {
        if !values.is_empty() {
            let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
            code.push_str(&format!(".with_allowed_values(&[{}])", quoted.join(", ")));
        }
    }
    code
}

/// Escape a description for embedding in a string literal. Newlines become
/// spaces, runs of spaces collapse to one, and long text is cut at a char
/// boundary.
fn escape(text: &str, max_len: usize) -> String {
    let mut escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ");
    while escaped.contains("  ") {
        escaped = escaped.replace("  ", " ");
    }
    if escaped.len() <= max_len {
        return escaped;
    }
    let mut end = max_len;
    while !escaped.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &escaped[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE_SCHEMA: &str = r##"{
        "typeName": "AWS::SQS::Queue",
        "description": "Resource Type definition for AWS::SQS::Queue",
        "documentationUrl": "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html",
        "definitions": {
            "Tag": {
                "type": "object",
                "properties": {
                    "Key": {"type": "string"},
                    "Value": {"type": "string"}
                },
                "required": ["Key", "Value"]
            }
        },
        "properties": {
            "QueueName": {"type": "string", "description": "A name for the queue."},
            "DelaySeconds": {"type": "integer", "minimum": 0, "maximum": 900},
            "FifoQueue": {"type": "boolean"},
            "DeduplicationScope": {"type": "string", "enum": ["messageGroup", "queue"]},
            "RedrivePolicy": {"type": "object"},
            "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
            "QueueUrl": {"type": "string"},
            "Arn": {"type": "string"}
        },
        "createOnlyProperties": ["/properties/QueueName", "/properties/FifoQueue"],
        "readOnlyProperties": ["/properties/QueueUrl", "/properties/Arn"]
    }"##;

    fn parse(json: &str) -> CfnSchema {
        serde_json::from_str(json).expect("valid schema JSON")
    }

    #[test]
    fn generates_module_skeleton() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        assert!(code.starts_with("//! queue schema definition for AWS CloudFormation"));
        assert!(code.contains("pub fn queue_schema() -> ResourceTypeSchema {"));
        assert!(code.contains("ResourceTypeSchema::new(\"AWS::SQS::Queue\")"));
        assert!(code.contains("fn tag_bag() -> PropertyBagSchema {"));
        assert!(code.contains(".property_bag(tag_bag())"));
    }

    #[test]
    fn emission_preserves_schema_property_order() {
        let schema = parse(
            r##"{
                "typeName": "AWS::EC2::SecurityGroup",
                "definitions": {
                    "Ingress": {
                        "type": "object",
                        "properties": {"IpProtocol": {"type": "string"}},
                        "required": ["IpProtocol"]
                    },
                    "Egress": {
                        "type": "object",
                        "properties": {"IpProtocol": {"type": "string"}},
                        "required": ["IpProtocol"]
                    }
                },
                "properties": {
                    "GroupDescription": {"type": "string"},
                    "GroupName": {"type": "string"},
                    "VpcId": {"type": "string"},
                    "SecurityGroupIngress": {"type": "array", "items": {"$ref": "#/definitions/Ingress"}},
                    "SecurityGroupEgress": {"type": "array", "items": {"$ref": "#/definitions/Egress"}}
                },
                "required": ["GroupDescription"]
            }"##,
        );
        let code = generate_module(&schema, "AWS::EC2::SecurityGroup").unwrap();

        // Definitions come out in schema order, not name order
        assert!(code.find("fn ingress_bag").unwrap() < code.find("fn egress_bag").unwrap());

        let mut last = 0;
        for name in [
            "GroupDescription",
            "GroupName",
            "VpcId",
            "SecurityGroupIngress",
            "SecurityGroupEgress",
        ] {
            let pos = code
                .find(&format!("PropertySchema::new(\"{}\"", name))
                .unwrap_or_else(|| panic!("{} not emitted", name));
            assert!(pos > last, "{} emitted out of schema order", name);
            last = pos;
        }
    }

    #[test]
    fn create_only_becomes_immutable() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        let queue_name = code
            .split(".property(")
            .find(|block| block.contains("\"QueueName\""))
            .unwrap();
        assert!(queue_name.contains(".with_update_type(UpdateType::Immutable)"));
    }

    #[test]
    fn read_only_properties_are_skipped() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        assert!(!code.contains("\"QueueUrl\""));
        assert!(!code.contains("\"Arn\""));
    }

    #[test]
    fn constraints_are_carried() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        assert!(code.contains(".with_minimum(0.0).with_maximum(900.0)"));
        assert!(code.contains(".with_allowed_values(&[\"messageGroup\", \"queue\"])"));
    }

    #[test]
    fn constraints_import_omitted_when_only_read_only_is_constrained() {
        let schema = parse(
            r##"{
                "typeName": "AWS::Fake::Thing",
                "properties": {
                    "Name": {"type": "string"},
                    "Arn": {"type": "string", "pattern": "^arn:"}
                },
                "readOnlyProperties": ["/properties/Arn"]
            }"##,
        );
        let code = generate_module(&schema, "AWS::Fake::Thing").unwrap();
        assert!(!code.contains("Constraints"));
    }

    #[test]
    fn untyped_object_maps_to_json() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        assert!(code.contains("PropertySchema::new(\"RedrivePolicy\", PropertyType::Json)"));
    }

    #[test]
    fn ref_resolves_to_named_bag() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        assert!(code.contains(
            "PropertyType::List(Box::new(PropertyType::Named(\"Tag\".to_string())))"
        ));
    }

    #[test]
    fn unresolvable_ref_is_an_error() {
        let schema = parse(
            r##"{
                "typeName": "AWS::Fake::Thing",
                "properties": {
                    "Config": {"$ref": "#/definitions/Missing"}
                }
            }"##,
        );
        let err = generate_module(&schema, "AWS::Fake::Thing").unwrap_err();
        assert!(format!("{:#}", err).contains("#/definitions/Missing"));
    }

    #[test]
    fn type_name_mismatch_is_an_error() {
        let schema = parse(QUEUE_SCHEMA);
        assert!(generate_module(&schema, "AWS::SQS::QueuePolicy").is_err());
    }

    #[test]
    fn typed_additional_properties_becomes_map() {
        let prop: CfnProperty = serde_json::from_str(
            r#"{"type": "object", "additionalProperties": {"type": "string"}}"#,
        )
        .unwrap();
        let rendered = cfn_type(&prop, &Map::new()).unwrap();
        assert_eq!(rendered, "PropertyType::Map(Box::new(PropertyType::String))");
    }

    #[test]
    fn drift_check_ignores_tests_and_rewrapping() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        // A committed module: same generated region after rustfmt wrapped one
        // call (with its trailing comma), plus a hand-written test module
        let committed = format!(
            "{}\n#[cfg(test)]\nmod tests {{\n    #[test]\n    fn queue_name() {{}}\n}}\n",
            code.replace(
                "PropertySchema::new(\"QueueName\", PropertyType::String)",
                "PropertySchema::new(\n                \"QueueName\",\n                PropertyType::String,\n            )",
            )
        );
        assert_eq!(normalized(generated_region(&committed)), normalized(&code));
    }

    #[test]
    fn drift_check_detects_description_changes() {
        let schema = parse(QUEUE_SCHEMA);
        let code = generate_module(&schema, "AWS::SQS::Queue").unwrap();
        let committed = code.replace("A name for the queue.", "Queue name.");
        assert_ne!(normalized(generated_region(&committed)), normalized(&code));
    }

    #[test]
    fn description_escaping() {
        let text = "says \"hi\"\nand   more";
        assert_eq!(escape(text, usize::MAX), "says \\\"hi\\\" and more");
        let truncated = escape("aéééé", 3);
        assert!(truncated.ends_with("..."));
    }
}
