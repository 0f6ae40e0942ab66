//! function schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::Lambda::Function
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Code` property type for AWS::Lambda::Function
fn code_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Code")
        .property(
            PropertySchema::new("ZipFile", PropertyType::String)
                .with_description("(Node.js and Python) The source code of your Lambda function, inline. Cannot be used with an S3 location or image."),
        )
        .property(
            PropertySchema::new("S3Bucket", PropertyType::String)
                .with_constraints(Constraints::new().with_min_length(3).with_max_length(63))
                .with_description("An Amazon S3 bucket in the same AWS Region as your function."),
        )
        .property(
            PropertySchema::new("S3Key", PropertyType::String)
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(1024))
                .with_description("The Amazon S3 key of the deployment package."),
        )
        .property(
            PropertySchema::new("S3ObjectVersion", PropertyType::String)
                .with_description("For versioned objects, the version of the deployment package object to use."),
        )
        .property(
            PropertySchema::new("ImageUri", PropertyType::String)
                .with_description("URI of a container image in the Amazon ECR registry."),
        )
}

/// The `Environment` property type for AWS::Lambda::Function
fn environment_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Environment").property(
        PropertySchema::new(
            "Variables",
            PropertyType::Map(Box::new(PropertyType::String)),
        )
        .with_description("Environment variable key-value pairs."),
    )
}

/// The `VpcConfig` property type for AWS::Lambda::Function
fn vpc_config_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("VpcConfig")
        .property(
            PropertySchema::new(
                "SubnetIds",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("A list of VPC subnet IDs. Maximum of 16."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroupIds",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("A list of VPC security group IDs. Maximum of 5."),
        )
        .property(
            PropertySchema::new("Ipv6AllowedForDualStack", PropertyType::Boolean)
                .with_description("Allows outbound IPv6 traffic on VPC functions that are connected to dual-stack subnets."),
        )
}

/// The `DeadLetterConfig` property type for AWS::Lambda::Function
fn dead_letter_config_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("DeadLetterConfig").property(
        PropertySchema::new("TargetArn", PropertyType::String)
            .with_constraints(
                Constraints::new().with_pattern("^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$"),
            )
            .with_description("The ARN of an Amazon SQS queue or Amazon SNS topic."),
    )
}

/// The `EphemeralStorage` property type for AWS::Lambda::Function
fn ephemeral_storage_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("EphemeralStorage").property(
        PropertySchema::new("Size", PropertyType::Number)
            .required()
            .with_constraints(Constraints::new().with_minimum(512.0).with_maximum(10240.0))
            .with_description("The size of the function's /tmp directory in MB."),
    )
}

/// The `TracingConfig` property type for AWS::Lambda::Function
fn tracing_config_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("TracingConfig").property(
        PropertySchema::new("Mode", PropertyType::String)
            .with_constraints(Constraints::new().with_allowed_values(&["Active", "PassThrough"]))
            .with_description("The tracing mode."),
    )
}

/// The `Tag` property type for AWS::Lambda::Function
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(128))
                .with_description("The key for this tag."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(256))
                .with_description("The value for this tag."),
        )
}

/// Returns the schema for AWS::Lambda::Function
pub fn function_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::Lambda::Function")
        .with_description("The AWS::Lambda::Function resource creates a Lambda function.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-function.html")
        .property_bag(code_bag())
        .property_bag(environment_bag())
        .property_bag(vpc_config_bag())
        .property_bag(dead_letter_config_bag())
        .property_bag(ephemeral_storage_bag())
        .property_bag(tracing_config_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("Code", PropertyType::Named("Code".to_string()))
                .required()
                .with_description("The code for the function."),
        )
        .property(
            PropertySchema::new("Role", PropertyType::String)
                .required()
                .with_constraints(
                    Constraints::new()
                        .with_pattern("^arn:(aws[a-zA-Z-]*)?:iam::\\d{12}:role/?[a-zA-Z_0-9+=,.@\\-_/]+$"),
                )
                .with_description("The Amazon Resource Name (ARN) of the function's execution role."),
        )
        .property(
            PropertySchema::new("FunctionName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_min_length(1))
                .with_description("The name of the Lambda function, up to 64 characters in length. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("Handler", PropertyType::String)
                .with_constraints(
                    Constraints::new()
                        .with_max_length(128)
                        .with_pattern("^[^\\s]+$"),
                )
                .with_description("The name of the method within your code that Lambda calls to run your function. Required if the deployment package is a .zip file archive."),
        )
        .property(
            PropertySchema::new("Runtime", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "nodejs18.x",
                    "nodejs20.x",
                    "nodejs22.x",
                    "python3.9",
                    "python3.10",
                    "python3.11",
                    "python3.12",
                    "python3.13",
                    "java11",
                    "java17",
                    "java21",
                    "dotnet6",
                    "dotnet8",
                    "ruby3.2",
                    "ruby3.3",
                    "provided.al2",
                    "provided.al2023",
                ]))
                .with_description("The identifier of the function's runtime. Required if the deployment package is a .zip file archive."),
        )
        .property(
            PropertySchema::new("MemorySize", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(128.0).with_maximum(10240.0))
                .with_description("The amount of memory available to the function at runtime. Default: 128."),
        )
        .property(
            PropertySchema::new("Timeout", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(1.0).with_maximum(900.0))
                .with_description("The amount of time (in seconds) that Lambda allows a function to run before stopping it. Default: 3."),
        )
        .property(
            PropertySchema::new(
                "Environment",
                PropertyType::Named("Environment".to_string()),
            )
            .with_description("Environment variables that are accessible from function code during execution."),
        )
        .property(
            PropertySchema::new("VpcConfig", PropertyType::Named("VpcConfig".to_string()))
                .with_description("For network connectivity to AWS resources in a VPC, specify a list of security groups and subnets in the VPC."),
        )
        .property(
            PropertySchema::new(
                "DeadLetterConfig",
                PropertyType::Named("DeadLetterConfig".to_string()),
            )
            .with_description("A dead-letter queue configuration that specifies the queue or topic where Lambda sends asynchronous events when they fail processing."),
        )
        .property(
            PropertySchema::new(
                "EphemeralStorage",
                PropertyType::Named("EphemeralStorage".to_string()),
            )
            .with_description("The size of the function's /tmp directory in MB. Default: 512."),
        )
        .property(
            PropertySchema::new(
                "TracingConfig",
                PropertyType::Named("TracingConfig".to_string()),
            )
            .with_description("Set Mode to Active to sample and trace a subset of incoming requests with X-Ray."),
        )
        .property(
            PropertySchema::new(
                "Architectures",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_constraints(Constraints::new().with_allowed_values(&["x86_64", "arm64"]))
            .with_description("The instruction set architecture that the function supports. Default: x86_64."),
        )
        .property(
            PropertySchema::new("PackageType", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_allowed_values(&["Zip", "Image"]))
                .with_description("The type of deployment package. Default: Zip."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(256))
                .with_description("A description of the function."),
        )
        .property(
            PropertySchema::new("KmsKeyArn", PropertyType::String)
                .with_description("The ARN of the KMS key that's used to encrypt your function's environment variables."),
        )
        .property(
            PropertySchema::new("Layers", PropertyType::List(Box::new(PropertyType::String)))
                .with_description("A list of function layers to add to the function's execution environment. Specify each layer by its ARN, including the version."),
        )
        .property(
            PropertySchema::new("ReservedConcurrentExecutions", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(0.0))
                .with_description("The number of simultaneous executions to reserve for the function."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("A list of tags to apply to the function."),
        )
}
