//! role schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::IAM::Role
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Policy` property type for AWS::IAM::Role
fn policy_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Policy")
        .property(
            PropertySchema::new("PolicyName", PropertyType::String)
                .required()
                .with_constraints(
                    Constraints::new()
                        .with_min_length(1)
                        .with_max_length(128)
                        .with_pattern("[\\w+=,.@-]+"),
                )
                .with_description("The friendly name (not ARN) identifying the policy."),
        )
        .property(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("The policy document."),
        )
}

/// The `Tag` property type for AWS::IAM::Role
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(128))
                .with_description("The key name that can be used to look up or retrieve the associated value."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_max_length(256))
                .with_description("The value associated with this tag."),
        )
}

/// Returns the schema for AWS::IAM::Role
pub fn role_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::IAM::Role")
        .with_description("Creates a new role for your AWS account.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html")
        .property_bag(policy_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("AssumeRolePolicyDocument", PropertyType::Json)
                .required()
                .with_description("The trust policy that is associated with this role. Trust policies define which entities can assume the role."),
        )
        .property(
            PropertySchema::new("RoleName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(
                    Constraints::new()
                        .with_min_length(1)
                        .with_max_length(64)
                        .with_pattern("[\\w+=,.@-]+"),
                )
                .with_description("A name for the IAM role, up to 64 characters in length. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(1000))
                .with_description("A description of the role that you provide."),
        )
        .property(
            PropertySchema::new(
                "ManagedPolicyArns",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("A list of Amazon Resource Names (ARNs) of the IAM managed policies that you want to attach to the role."),
        )
        .property(
            PropertySchema::new("MaxSessionDuration", PropertyType::Number)
                .with_constraints(Constraints::new().with_minimum(3600.0).with_maximum(43200.0))
                .with_description("The maximum session duration (in seconds) that you want to set for the specified role. Default: 3600."),
        )
        .property(
            PropertySchema::new("Path", PropertyType::String)
                .with_constraints(
                    Constraints::new()
                        .with_min_length(1)
                        .with_max_length(512)
                        .with_pattern("(\\u002F)|(\\u002F[\\u0021-\\u007F]+\\u002F)"),
                )
                .with_description("The path to the role. Default: /."),
        )
        .property(
            PropertySchema::new("PermissionsBoundary", PropertyType::String)
                .with_description("The ARN of the policy used to set the permissions boundary for the role."),
        )
        .property(
            PropertySchema::new(
                "Policies",
                PropertyType::List(Box::new(PropertyType::Named("Policy".to_string()))),
            )
            .with_description("Adds or updates a list of inline policy documents that are embedded in the role."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("A list of tags that are attached to the role."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_role_with_inline_policy() {
        let schema = role_schema();
        let attrs = props(json!({
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": {"Service": "lambda.amazonaws.com"},
                    "Action": "sts:AssumeRole"
                }]
            },
            "Policies": [{
                "PolicyName": "logs",
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{"Effect": "Allow", "Action": "logs:*", "Resource": "*"}]
                }
            }],
            "MaxSessionDuration": 7200
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn assume_role_policy_required() {
        let schema = role_schema();
        let errors = schema.validate(&props(json!({"RoleName": "svc"}))).unwrap_err();
        assert!(errors[0].to_string().contains("AssumeRolePolicyDocument"));
    }

    #[test]
    fn inline_policy_requires_name_and_document() {
        let schema = role_schema();
        let attrs = props(json!({
            "AssumeRolePolicyDocument": {},
            "Policies": [{"PolicyName": "p"}]
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("PolicyDocument"));
    }
}
