//! managed_policy schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::IAM::ManagedPolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// Returns the schema for AWS::IAM::ManagedPolicy
pub fn managed_policy_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::IAM::ManagedPolicy")
        .with_description("Creates a new managed policy for your AWS account.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-managedpolicy.html")
        .property(
            PropertySchema::new("PolicyDocument", PropertyType::Json)
                .required()
                .with_description("The JSON policy document that you want to use as the content for the new policy."),
        )
        .property(
            PropertySchema::new("ManagedPolicyName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(128))
                .with_description("The friendly name of the policy. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_max_length(1000))
                .with_description("A friendly description of the policy."),
        )
        .property(
            PropertySchema::new("Path", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The path for the policy. Default: /."),
        )
        .property(
            PropertySchema::new("Groups", PropertyType::List(Box::new(PropertyType::String)))
                .with_description("The name (friendly name, not ARN) of the group to attach the policy to."),
        )
        .property(
            PropertySchema::new("Roles", PropertyType::List(Box::new(PropertyType::String)))
                .with_description("The name (friendly name, not ARN) of the role to attach the policy to."),
        )
        .property(
            PropertySchema::new("Users", PropertyType::List(Box::new(PropertyType::String)))
                .with_description("The name (friendly name, not ARN) of the IAM user to attach the policy to."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_managed_policy() {
        let schema = managed_policy_schema();
        let attrs = props(json!({
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{"Effect": "Allow", "Action": "s3:GetObject", "Resource": "*"}]
            },
            "Roles": [{"Ref": "AppRole"}]
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn policy_document_required() {
        let schema = managed_policy_schema();
        assert!(schema.validate(&props(json!({}))).is_err());
    }
}
