//! job schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::Glue::Job
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `JobCommand` property type for AWS::Glue::Job
fn job_command_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("JobCommand")
        .property(
            PropertySchema::new("Name", PropertyType::String)
                .with_description("The name of the job command: glueetl, pythonshell or gluestreaming."),
        )
        .property(
            PropertySchema::new("PythonVersion", PropertyType::String)
                .with_constraints(Constraints::new().with_pattern("^([2-3]|3[.]9)$"))
                .with_description("The Python version being used to run a Python shell job."),
        )
        .property(
            PropertySchema::new("ScriptLocation", PropertyType::String)
                .with_description("Specifies the Amazon S3 path to a script that runs a job."),
        )
        .property(
            PropertySchema::new("Runtime", PropertyType::String)
                .with_description("The runtime of the Ray job, for Ray jobs."),
        )
}

/// The `ConnectionsList` property type for AWS::Glue::Job
fn connections_list_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ConnectionsList").property(
        PropertySchema::new(
            "Connections",
            PropertyType::List(Box::new(PropertyType::String)),
        )
        .with_description("A list of connections used by the job."),
    )
}

/// The `ExecutionProperty` property type for AWS::Glue::Job
fn execution_property_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ExecutionProperty").property(
        PropertySchema::new("MaxConcurrentRuns", PropertyType::Number)
            .with_description("The maximum number of concurrent runs allowed for the job."),
    )
}

/// The `NotificationProperty` property type for AWS::Glue::Job
fn notification_property_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("NotificationProperty").property(
        PropertySchema::new("NotifyDelayAfter", PropertyType::Number)
            .with_description("After a job run starts, the number of minutes to wait before sending a job run delay notification."),
    )
}

/// Returns the schema for AWS::Glue::Job
pub fn job_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::Glue::Job")
        .with_description("The AWS::Glue::Job resource specifies an AWS Glue job in the data catalog.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-glue-job.html")
        .property_bag(job_command_bag())
        .property_bag(connections_list_bag())
        .property_bag(execution_property_bag())
        .property_bag(notification_property_bag())
        .property(
            PropertySchema::new("Command", PropertyType::Named("JobCommand".to_string()))
                .required()
                .with_description("The code that executes a job."),
        )
        .property(
            PropertySchema::new("Role", PropertyType::String)
                .required()
                .with_description("The name or ARN of the IAM role associated with this job."),
        )
        .property(
            PropertySchema::new("Name", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(255))
                .with_description("The name you assign to this job definition. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_description("A description of the job."),
        )
        .property(
            PropertySchema::new(
                "DefaultArguments",
                PropertyType::Map(Box::new(PropertyType::String)),
            )
            .with_description("The default arguments for this job, specified as name-value pairs."),
        )
        .property(
            PropertySchema::new("GlueVersion", PropertyType::String)
                .with_constraints(Constraints::new().with_pattern("^\\w+\\.\\w+$"))
                .with_description("Glue version determines the versions of Apache Spark and Python that Glue supports."),
        )
        .property(
            PropertySchema::new("WorkerType", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "Standard", "G.1X", "G.2X", "G.4X", "G.8X", "G.025X", "Z.2X",
                ]))
                .with_description("The type of predefined worker that is allocated when a job runs."),
        )
        .property(
            PropertySchema::new("NumberOfWorkers", PropertyType::Number)
                .with_description("The number of workers of a defined workerType that are allocated when a job runs."),
        )
        .property(
            PropertySchema::new("MaxCapacity", PropertyType::Number)
                .with_description("The number of Glue data processing units (DPUs) that can be allocated when this job runs. Do not set with NumberOfWorkers."),
        )
        .property(
            PropertySchema::new("MaxRetries", PropertyType::Number)
                .with_description("The maximum number of times to retry this job after a JobRun fails."),
        )
        .property(
            PropertySchema::new("Timeout", PropertyType::Number)
                .with_description("The job timeout in minutes."),
        )
        .property(
            PropertySchema::new(
                "Connections",
                PropertyType::Named("ConnectionsList".to_string()),
            )
            .with_description("The connections used for this job."),
        )
        .property(
            PropertySchema::new(
                "ExecutionProperty",
                PropertyType::Named("ExecutionProperty".to_string()),
            )
            .with_description("The maximum number of concurrent runs that are allowed for this job."),
        )
        .property(
            PropertySchema::new(
                "NotificationProperty",
                PropertyType::Named("NotificationProperty".to_string()),
            )
            .with_description("Specifies configuration properties of a notification."),
        )
        .property(
            PropertySchema::new("SecurityConfiguration", PropertyType::String)
                .with_description("The name of the SecurityConfiguration structure to be used with this job."),
        )
        .property(
            PropertySchema::new("LogUri", PropertyType::String)
                .with_description("This field is reserved for future use."),
        )
        .property(
            PropertySchema::new("Tags", PropertyType::Json)
                .with_description("The tags to use with this job. AWS Glue takes tags as a free-form JSON object rather than a list."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_etl_job() {
        let schema = job_schema();
        let attrs = props(json!({
            "Command": {
                "Name": "glueetl",
                "ScriptLocation": {"Fn::Sub": "s3://${ScriptsBucket}/etl.py"},
                "PythonVersion": "3"
            },
            "Role": {"Fn::GetAtt": ["GlueRole", "Arn"]},
            "GlueVersion": "4.0",
            "WorkerType": "G.1X",
            "NumberOfWorkers": 10,
            "DefaultArguments": {"--job-language": "python"},
            "Tags": {"team": "data"}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn command_and_role_required() {
        let schema = job_schema();
        let errors = schema.validate(&props(json!({}))).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(messages.iter().any(|m| m.contains("Command")));
        assert!(messages.iter().any(|m| m.contains("Role")));
    }

    #[test]
    fn glue_tags_accept_free_form_json() {
        // Unlike most resources, Glue tags are a Json object, not a Tag list
        let schema = job_schema();
        let attrs = props(json!({
            "Command": {"Name": "glueetl"},
            "Role": "GlueRole",
            "Tags": {"env": "prod", "count": 3}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }
}
