//! queue schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::SQS::Queue
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Tag` property type for AWS::SQS::Queue
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_description("The tag key."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .with_description("The tag value."),
        )
}

/// Returns the schema for AWS::SQS::Queue
pub fn queue_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::SQS::Queue")
        .with_description("The AWS::SQS::Queue resource creates an Amazon SQS standard or FIFO queue.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html")
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("QueueName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("A name for the queue. FIFO queue names must end with .fifo. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("FifoQueue", PropertyType::Boolean)
                .with_update_type(UpdateType::Immutable)
                .with_description("If set to true, creates a FIFO queue. Omit for a standard queue."),
        )
        .property(
            PropertySchema::new("ContentBasedDeduplication", PropertyType::Boolean)
                .with_description("For first-in-first-out (FIFO) queues, specifies whether to enable content-based deduplication."),
        )
        .property(
            PropertySchema::new("DeduplicationScope", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["messageGroup", "queue"]),
                )
                .with_description("For high throughput for FIFO queues, specifies whether message deduplication occurs at the message group or queue level."),
        )
        .property(
            PropertySchema::new("FifoThroughputLimit", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["perQueue", "perMessageGroupId"]),
                )
                .with_description("For high throughput for FIFO queues, specifies whether the FIFO queue throughput quota applies to the entire queue or per message group."),
        )
        .property(
            PropertySchema::new("DelaySeconds", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(0.0).with_maximum(900.0))
                .with_description("The time in seconds for which the delivery of all messages in the queue is delayed. Default: 0."),
        )
        .property(
            PropertySchema::new("MaximumMessageSize", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(1024.0).with_maximum(262144.0))
                .with_description("The limit of how many bytes that a message can contain before Amazon SQS rejects it. Default: 262144 (256 KiB)."),
        )
        .property(
            PropertySchema::new("MessageRetentionPeriod", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(60.0).with_maximum(1209600.0))
                .with_description("The number of seconds that Amazon SQS retains a message. Default: 345600 (4 days)."),
        )
        .property(
            PropertySchema::new("ReceiveMessageWaitTimeSeconds", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(0.0).with_maximum(20.0))
                .with_description("Specifies the duration, in seconds, that the ReceiveMessage action call waits until a message is in the queue."),
        )
        .property(
            PropertySchema::new("VisibilityTimeout", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(0.0).with_maximum(43200.0))
                .with_description("The length of time during which a message will be unavailable after a message is delivered from the queue. Default: 30."),
        )
        .property(
            PropertySchema::new("RedrivePolicy", PropertyType::Json)
                .with_description("The string that includes the parameters for the dead-letter queue functionality of the source queue as a JSON object."),
        )
        .property(
            PropertySchema::new("RedriveAllowPolicy", PropertyType::Json)
                .with_description("The string that includes the parameters for the permissions for the dead-letter queue redrive permission."),
        )
        .property(
            PropertySchema::new("KmsMasterKeyId", PropertyType::String)
                .with_description("The ID of an AWS Key Management Service (KMS) for Amazon SQS, or a custom KMS."),
        )
        .property(
            PropertySchema::new("KmsDataKeyReusePeriodSeconds", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(60.0).with_maximum(86400.0))
                .with_description("The length of time in seconds for which Amazon SQS can reuse a data key to encrypt or decrypt messages before calling KMS again. Default: 300."),
        )
        .property(
            PropertySchema::new("SqsManagedSseEnabled", PropertyType::Boolean)
                .with_description("Enables server-side queue encryption using SQS owned encryption keys."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("The tags that you attach to this queue."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_fifo_queue_with_dlq() {
        let schema = queue_schema();
        let attrs = props(json!({
            "QueueName": "orders.fifo",
            "FifoQueue": true,
            "ContentBasedDeduplication": true,
            "VisibilityTimeout": 120,
            "RedrivePolicy": {
                "deadLetterTargetArn": {"Fn::GetAtt": ["Dlq", "Arn"]},
                "maxReceiveCount": 5
            }
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn numeric_range_constraints_are_metadata() {
        let schema = queue_schema();
        let delay = &schema.properties["DelaySeconds"];
        assert_eq!(delay.constraints.maximum, Some(900.0));
        // Out-of-range values still pass structural validation
        let attrs = props(json!({"DelaySeconds": 10000}));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn no_required_properties() {
        let schema = queue_schema();
        assert!(schema.validate(&props(json!({}))).is_ok());
    }
}
