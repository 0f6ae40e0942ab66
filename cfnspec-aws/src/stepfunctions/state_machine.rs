//! state_machine schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::StepFunctions::StateMachine
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `S3Location` property type for AWS::StepFunctions::StateMachine
fn s3_location_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("S3Location")
        .property(
            PropertySchema::new("Bucket", PropertyType::String)
                .required()
                .with_description("The name of the S3 bucket where the state machine definition is stored."),
        )
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_description("The name of the state machine definition file."),
        )
        .property(
            PropertySchema::new("Version", PropertyType::String)
                .with_description("For versioning-enabled buckets, a specific version of the state machine definition."),
        )
}

/// The `CloudWatchLogsLogGroup` property type for AWS::StepFunctions::StateMachine
fn cloud_watch_logs_log_group_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("CloudWatchLogsLogGroup").property(
        PropertySchema::new("LogGroupArn", PropertyType::String)
            .with_constraints(Constraints::new().with_min_length(1).with_max_length(256))
            .with_description("The ARN of the CloudWatch log group to which you want your logs emitted."),
    )
}

/// The `LogDestination` property type for AWS::StepFunctions::StateMachine
fn log_destination_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("LogDestination").property(
        PropertySchema::new(
            "CloudWatchLogsLogGroup",
            PropertyType::Named("CloudWatchLogsLogGroup".to_string()),
        )
        .with_description("An object describing a CloudWatch log group."),
    )
}

/// The `LoggingConfiguration` property type for AWS::StepFunctions::StateMachine
fn logging_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("LoggingConfiguration")
        .property(
            PropertySchema::new("Level", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["ALL", "ERROR", "FATAL", "OFF"]),
                )
                .with_description("Defines which category of execution history events are logged."),
        )
        .property(
            PropertySchema::new("IncludeExecutionData", PropertyType::Boolean)
                .with_description("Determines whether execution data is included in your log."),
        )
        .property(
            PropertySchema::new(
                "Destinations",
                PropertyType::List(Box::new(PropertyType::Named("LogDestination".to_string()))),
            )
            .with_description("An array of objects that describes where your execution history events will be logged."),
        )
}

/// The `TracingConfiguration` property type for AWS::StepFunctions::StateMachine
fn tracing_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("TracingConfiguration").property(
        PropertySchema::new("Enabled", PropertyType::Boolean)
            .with_description("When set to true, X-Ray tracing is enabled."),
    )
}

/// The `TagsEntry` property type for AWS::StepFunctions::StateMachine
fn tags_entry_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("TagsEntry")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_description("The key for a key-value pair in a tag entry."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .with_description("The value for a key-value pair in a tag entry."),
        )
}

/// Returns the schema for AWS::StepFunctions::StateMachine
pub fn state_machine_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::StepFunctions::StateMachine")
        .with_description("Resource schema for StateMachine.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html")
        .property_bag(s3_location_bag())
        .property_bag(cloud_watch_logs_log_group_bag())
        .property_bag(log_destination_bag())
        .property_bag(logging_configuration_bag())
        .property_bag(tracing_configuration_bag())
        .property_bag(tags_entry_bag())
        .property(
            PropertySchema::new("RoleArn", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(256))
                .with_description("The Amazon Resource Name (ARN) of the IAM role to use for this state machine."),
        )
        .property(
            PropertySchema::new("StateMachineName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(80))
                .with_description("The name of the state machine. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("StateMachineType", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_allowed_values(&["STANDARD", "EXPRESS"]))
                .with_description("Determines whether a STANDARD or EXPRESS state machine is created. Default: STANDARD."),
        )
        .property(
            PropertySchema::new("Definition", PropertyType::Json)
                .with_description("The Amazon States Language definition of the state machine, as an object."),
        )
        .property(
            PropertySchema::new("DefinitionString", PropertyType::String)
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(1048576))
                .with_description("The Amazon States Language definition of the state machine, as a string."),
        )
        .property(
            PropertySchema::new(
                "DefinitionS3Location",
                PropertyType::Named("S3Location".to_string()),
            )
            .with_description("The name of the S3 bucket where the state machine definition JSON or YAML file is stored."),
        )
        .property(
            PropertySchema::new(
                "DefinitionSubstitutions",
                PropertyType::Map(Box::new(PropertyType::String)),
            )
            .with_description("A map of string-to-string substitutions applied to dynamic references in the definition."),
        )
        .property(
            PropertySchema::new(
                "LoggingConfiguration",
                PropertyType::Named("LoggingConfiguration".to_string()),
            )
            .with_description("Defines what execution history events are logged and where they are logged."),
        )
        .property(
            PropertySchema::new(
                "TracingConfiguration",
                PropertyType::Named("TracingConfiguration".to_string()),
            )
            .with_description("Selects whether or not the state machine's X-Ray tracing is enabled."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("TagsEntry".to_string()))),
            )
            .with_description("The list of tags to add to a resource."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_state_machine() {
        let schema = state_machine_schema();
        let attrs = props(json!({
            "RoleArn": {"Fn::GetAtt": ["StatesRole", "Arn"]},
            "StateMachineType": "STANDARD",
            "DefinitionS3Location": {"Bucket": "definitions", "Key": "order.asl.json"},
            "DefinitionSubstitutions": {"QueueUrl": {"Ref": "Queue"}},
            "LoggingConfiguration": {
                "Level": "ERROR",
                "IncludeExecutionData": false,
                "Destinations": [
                    {"CloudWatchLogsLogGroup": {"LogGroupArn": {"Fn::GetAtt": ["LogGroup", "Arn"]}}}
                ]
            },
            "TracingConfiguration": {"Enabled": true}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn role_arn_required() {
        let schema = state_machine_schema();
        let errors = schema
            .validate(&props(json!({"StateMachineName": "orders"})))
            .unwrap_err();
        assert!(errors[0].to_string().contains("RoleArn"));
    }

    #[test]
    fn definition_substitutions_is_a_string_map() {
        let schema = state_machine_schema();
        let attrs = props(json!({
            "RoleArn": "arn:aws:iam::123456789012:role/states",
            "DefinitionSubstitutions": {"Count": 3}
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("DefinitionSubstitutions"));
    }

    #[test]
    fn s3_location_requires_bucket_and_key() {
        let schema = state_machine_schema();
        let attrs = props(json!({
            "RoleArn": "arn:aws:iam::123456789012:role/states",
            "DefinitionS3Location": {"Bucket": "definitions"}
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("Key"));
    }
}
