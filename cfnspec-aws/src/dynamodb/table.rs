//! table schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::DynamoDB::Table
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `AttributeDefinition` property type for AWS::DynamoDB::Table
fn attribute_definition_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("AttributeDefinition")
        .property(
            PropertySchema::new("AttributeName", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(255))
                .with_description("A name for the attribute."),
        )
        .property(
            PropertySchema::new("AttributeType", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_allowed_values(&["S", "N", "B"]))
                .with_description("The data type for the attribute: S (string), N (number) or B (binary)."),
        )
}

/// The `KeySchema` property type for AWS::DynamoDB::Table
fn key_schema_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("KeySchema")
        .property(
            PropertySchema::new("AttributeName", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(255))
                .with_description("The name of a key attribute."),
        )
        .property(
            PropertySchema::new("KeyType", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_allowed_values(&["HASH", "RANGE"]))
                .with_description("The role that this key attribute will assume: HASH (partition key) or RANGE (sort key)."),
        )
}

/// The `ProvisionedThroughput` property type for AWS::DynamoDB::Table
fn provisioned_throughput_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ProvisionedThroughput")
        .property(
            PropertySchema::new("ReadCapacityUnits", PropertyType::Number)
                .required()
                .with_description("The maximum number of strongly consistent reads consumed per second before DynamoDB returns a ThrottlingException."),
        )
        .property(
            PropertySchema::new("WriteCapacityUnits", PropertyType::Number)
                .required()
                .with_description("The maximum number of writes consumed per second before DynamoDB returns a ThrottlingException."),
        )
}

/// The `Projection` property type for AWS::DynamoDB::Table
fn projection_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Projection")
        .property(
            PropertySchema::new("ProjectionType", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["ALL", "KEYS_ONLY", "INCLUDE"]),
                )
                .with_description("The set of attributes that are projected into the index."),
        )
        .property(
            PropertySchema::new(
                "NonKeyAttributes",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The non-key attribute names which are projected into the index. Maximum of 20 across all indexes."),
        )
}

/// The `GlobalSecondaryIndex` property type for AWS::DynamoDB::Table
fn global_secondary_index_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("GlobalSecondaryIndex")
        .property(
            PropertySchema::new("IndexName", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(3).with_max_length(255))
                .with_description("The name of the global secondary index. Must be unique only for this table."),
        )
        .property(
            PropertySchema::new(
                "KeySchema",
                PropertyType::List(Box::new(PropertyType::Named("KeySchema".to_string()))),
            )
            .required()
            .with_description("The complete key schema for a global secondary index."),
        )
        .property(
            PropertySchema::new("Projection", PropertyType::Named("Projection".to_string()))
                .required()
                .with_description("Represents attributes that are copied (projected) from the table into the global secondary index."),
        )
        .property(
            PropertySchema::new(
                "ProvisionedThroughput",
                PropertyType::Named("ProvisionedThroughput".to_string()),
            )
            .with_description("The provisioned throughput settings for the global secondary index. Required for PROVISIONED billing."),
        )
}

/// The `StreamSpecification` property type for AWS::DynamoDB::Table
fn stream_specification_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("StreamSpecification").property(
        PropertySchema::new("StreamViewType", PropertyType::String)
            .required()
            .with_constraints(Constraints::new().with_allowed_values(&[
                "KEYS_ONLY",
                "NEW_IMAGE",
                "OLD_IMAGE",
                "NEW_AND_OLD_IMAGES",
            ]))
            .with_description("Determines what information is written to the stream for this table when an item is modified."),
    )
}

/// The `TimeToLiveSpecification` property type for AWS::DynamoDB::Table
fn time_to_live_specification_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("TimeToLiveSpecification")
        .property(
            PropertySchema::new("AttributeName", PropertyType::String)
                .with_description("The name of the TTL attribute used to store the expiration time. Required if Enabled is true."),
        )
        .property(
            PropertySchema::new("Enabled", PropertyType::Boolean)
                .required()
                .with_description("Indicates whether TTL is to be enabled (true) or disabled (false) on the table."),
        )
}

/// The `Tag` property type for AWS::DynamoDB::Table
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_description("The key name of the tag."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .with_description("The value for the tag."),
        )
}

/// Returns the schema for AWS::DynamoDB::Table
pub fn table_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::DynamoDB::Table")
        .with_description("The AWS::DynamoDB::Table resource creates a DynamoDB table.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-dynamodb-table.html")
        .property_bag(attribute_definition_bag())
        .property_bag(key_schema_bag())
        .property_bag(provisioned_throughput_bag())
        .property_bag(projection_bag())
        .property_bag(global_secondary_index_bag())
        .property_bag(stream_specification_bag())
        .property_bag(time_to_live_specification_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new(
                "KeySchema",
                PropertyType::List(Box::new(PropertyType::Named("KeySchema".to_string()))),
            )
            .required()
            .with_update_type(UpdateType::Immutable)
            .with_description("Specifies the attributes that make up the primary key for the table."),
        )
        .property(
            PropertySchema::new(
                "AttributeDefinitions",
                PropertyType::List(Box::new(PropertyType::Named(
                    "AttributeDefinition".to_string(),
                ))),
            )
            .with_update_type(UpdateType::Conditional)
            .with_description("A list of attributes that describe the key schema for the table and indexes."),
        )
        .property(
            PropertySchema::new("TableName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("A name for the table. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("BillingMode", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["PROVISIONED", "PAY_PER_REQUEST"]),
                )
                .with_description("Specify how you are charged for read and write throughput and how you manage capacity. Default: PROVISIONED."),
        )
        .property(
            PropertySchema::new(
                "ProvisionedThroughput",
                PropertyType::Named("ProvisionedThroughput".to_string()),
            )
            .with_description("Throughput for the specified table. Required if BillingMode is PROVISIONED."),
        )
        .property(
            PropertySchema::new(
                "GlobalSecondaryIndexes",
                PropertyType::List(Box::new(PropertyType::Named(
                    "GlobalSecondaryIndex".to_string(),
                ))),
            )
            .with_description("Global secondary indexes to be created on the table. You can create up to 20."),
        )
        .property(
            PropertySchema::new(
                "StreamSpecification",
                PropertyType::Named("StreamSpecification".to_string()),
            )
            .with_description("The settings for the DynamoDB table stream, which capture changes to items stored in the table."),
        )
        .property(
            PropertySchema::new(
                "TimeToLiveSpecification",
                PropertyType::Named("TimeToLiveSpecification".to_string()),
            )
            .with_description("Specifies the Time to Live (TTL) settings for the table."),
        )
        .property(
            PropertySchema::new("DeletionProtectionEnabled", PropertyType::Boolean)
                .with_description("Determines if a table is protected from deletion."),
        )
        .property(
            PropertySchema::new("TableClass", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "STANDARD",
                    "STANDARD_INFREQUENT_ACCESS",
                ]))
                .with_description("The table class of the new table."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("An array of key-value pairs to apply to this resource."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_table_with_gsi() {
        let schema = table_schema();
        let attrs = props(json!({
            "TableName": "orders",
            "BillingMode": "PAY_PER_REQUEST",
            "AttributeDefinitions": [
                {"AttributeName": "pk", "AttributeType": "S"},
                {"AttributeName": "sk", "AttributeType": "S"},
                {"AttributeName": "gsi1pk", "AttributeType": "S"}
            ],
            "KeySchema": [
                {"AttributeName": "pk", "KeyType": "HASH"},
                {"AttributeName": "sk", "KeyType": "RANGE"}
            ],
            "GlobalSecondaryIndexes": [{
                "IndexName": "gsi1",
                "KeySchema": [{"AttributeName": "gsi1pk", "KeyType": "HASH"}],
                "Projection": {"ProjectionType": "ALL"}
            }],
            "StreamSpecification": {"StreamViewType": "NEW_AND_OLD_IMAGES"},
            "TimeToLiveSpecification": {"AttributeName": "expires_at", "Enabled": true}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn key_schema_required() {
        let schema = table_schema();
        let errors = schema
            .validate(&props(json!({"TableName": "orders"})))
            .unwrap_err();
        assert!(errors[0].to_string().contains("KeySchema"));
    }

    #[test]
    fn gsi_requires_projection() {
        let schema = table_schema();
        let attrs = props(json!({
            "KeySchema": [{"AttributeName": "pk", "KeyType": "HASH"}],
            "GlobalSecondaryIndexes": [{
                "IndexName": "gsi1",
                "KeySchema": [{"AttributeName": "gsi1pk", "KeyType": "HASH"}]
            }]
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("Projection"));
    }

    #[test]
    fn provisioned_throughput_requires_both_capacities() {
        let schema = table_schema();
        let attrs = props(json!({
            "KeySchema": [{"AttributeName": "pk", "KeyType": "HASH"}],
            "ProvisionedThroughput": {"ReadCapacityUnits": 5}
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("WriteCapacityUnits"));
    }
}
