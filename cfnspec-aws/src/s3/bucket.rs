//! bucket schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::S3::Bucket
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `VersioningConfiguration` property type for AWS::S3::Bucket
fn versioning_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("VersioningConfiguration").property(
        PropertySchema::new("Status", PropertyType::String)
            .required()
            .with_constraints(Constraints::new().with_allowed_values(&["Enabled", "Suspended"]))
            .with_description("The versioning state of the bucket."),
    )
}

/// The `ServerSideEncryptionByDefault` property type for AWS::S3::Bucket
fn server_side_encryption_by_default_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ServerSideEncryptionByDefault")
        .property(
            PropertySchema::new("SSEAlgorithm", PropertyType::String)
                .required()
                .with_constraints(
                    Constraints::new().with_allowed_values(&["AES256", "aws:kms", "aws:kms:dsse"]),
                )
                .with_description("Server-side encryption algorithm to use for the default encryption."),
        )
        .property(
            PropertySchema::new("KMSMasterKeyID", PropertyType::String)
                .with_description("AWS KMS key ID, key ARN, alias name or alias ARN. Can only be used when SSEAlgorithm is aws:kms or aws:kms:dsse."),
        )
}

/// The `ServerSideEncryptionRule` property type for AWS::S3::Bucket
fn server_side_encryption_rule_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ServerSideEncryptionRule")
        .property(
            PropertySchema::new("BucketKeyEnabled", PropertyType::Boolean)
                .with_description("Specifies whether Amazon S3 should use an S3 Bucket Key with server-side encryption using KMS (SSE-KMS) for new objects in the bucket."),
        )
        .property(
            PropertySchema::new(
                "ServerSideEncryptionByDefault",
                PropertyType::Named("ServerSideEncryptionByDefault".to_string()),
            )
            .with_description("Specifies the default server-side encryption to apply to new objects in the bucket."),
        )
}

/// The `BucketEncryption` property type for AWS::S3::Bucket
fn bucket_encryption_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("BucketEncryption").property(
        PropertySchema::new(
            "ServerSideEncryptionConfiguration",
            PropertyType::List(Box::new(PropertyType::Named(
                "ServerSideEncryptionRule".to_string(),
            ))),
        )
        .required()
        .with_description("Specifies the default server-side-encryption configuration."),
    )
}

/// The `PublicAccessBlockConfiguration` property type for AWS::S3::Bucket
fn public_access_block_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("PublicAccessBlockConfiguration")
        .property(
            PropertySchema::new("BlockPublicAcls", PropertyType::Boolean)
                .with_description("Specifies whether Amazon S3 should block public access control lists (ACLs) for this bucket and objects in this bucket."),
        )
        .property(
            PropertySchema::new("BlockPublicPolicy", PropertyType::Boolean)
                .with_description("Specifies whether Amazon S3 should block public bucket policies for this bucket."),
        )
        .property(
            PropertySchema::new("IgnorePublicAcls", PropertyType::Boolean)
                .with_description("Specifies whether Amazon S3 should ignore public ACLs for this bucket and objects in this bucket."),
        )
        .property(
            PropertySchema::new("RestrictPublicBuckets", PropertyType::Boolean)
                .with_description("Specifies whether Amazon S3 should restrict public bucket policies for this bucket."),
        )
}

/// The `Tag` property type for AWS::S3::Bucket
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_min_length(1).with_max_length(128))
                .with_description("Name of the object key."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .required()
                .with_constraints(Constraints::new().with_max_length(256))
                .with_description("Value of the tag."),
        )
}

/// Returns the schema for AWS::S3::Bucket
pub fn bucket_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::S3::Bucket")
        .with_description("The AWS::S3::Bucket resource creates an Amazon S3 bucket in the same AWS Region where you create the AWS CloudFormation stack.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-bucket.html")
        .property_bag(versioning_configuration_bag())
        .property_bag(server_side_encryption_by_default_bag())
        .property_bag(server_side_encryption_rule_bag())
        .property_bag(bucket_encryption_bag())
        .property_bag(public_access_block_configuration_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("BucketName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(
                    Constraints::new()
                        .with_min_length(3)
                        .with_max_length(63)
                        .with_pattern("^[a-z0-9][a-z0-9.-]*[a-z0-9]$"),
                )
                .with_description("A name for the bucket. The bucket name must be globally unique. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new("AccessControl", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "AuthenticatedRead",
                    "AwsExecRead",
                    "BucketOwnerFullControl",
                    "BucketOwnerRead",
                    "LogDeliveryWrite",
                    "Private",
                    "PublicRead",
                    "PublicReadWrite",
                ]))
                .with_description("A canned access control list (ACL) that grants predefined permissions to the bucket. Legacy; consider bucket policies instead."),
        )
        .property(
            PropertySchema::new(
                "VersioningConfiguration",
                PropertyType::Named("VersioningConfiguration".to_string()),
            )
            .with_description("Enables multiple versions of all objects in this bucket."),
        )
        .property(
            PropertySchema::new(
                "BucketEncryption",
                PropertyType::Named("BucketEncryption".to_string()),
            )
            .with_description("Specifies default encryption for a bucket using server-side encryption with S3-managed keys (SSE-S3), KMS keys (SSE-KMS) or dual-layer KMS keys (DSSE-KMS)."),
        )
        .property(
            PropertySchema::new(
                "PublicAccessBlockConfiguration",
                PropertyType::Named("PublicAccessBlockConfiguration".to_string()),
            )
            .with_description("Configuration that defines how Amazon S3 handles public access."),
        )
        .property(
            PropertySchema::new("ObjectLockEnabled", PropertyType::Boolean)
                .with_update_type(UpdateType::Immutable)
                .with_description("Indicates whether this bucket has an Object Lock configuration enabled."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("An arbitrary set of tags (key-value pairs) for this S3 bucket."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_bucket_with_encryption() {
        let schema = bucket_schema();
        let attrs = props(json!({
            "BucketName": {"Fn::Sub": "${AWS::StackName}-artifacts"},
            "VersioningConfiguration": {"Status": "Enabled"},
            "BucketEncryption": {
                "ServerSideEncryptionConfiguration": [
                    {
                        "BucketKeyEnabled": true,
                        "ServerSideEncryptionByDefault": {"SSEAlgorithm": "aws:kms"}
                    }
                ]
            },
            "PublicAccessBlockConfiguration": {
                "BlockPublicAcls": true,
                "BlockPublicPolicy": true,
                "IgnorePublicAcls": true,
                "RestrictPublicBuckets": true
            }
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn versioning_status_required() {
        let schema = bucket_schema();
        let attrs = props(json!({"VersioningConfiguration": {}}));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("Status"));
    }

    #[test]
    fn encryption_rules_list_required_inside_bag() {
        let schema = bucket_schema();
        let attrs = props(json!({"BucketEncryption": {}}));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(
            errors[0]
                .to_string()
                .contains("ServerSideEncryptionConfiguration")
        );
    }

    #[test]
    fn no_required_properties_at_top_level() {
        let schema = bucket_schema();
        assert!(schema.validate(&props(json!({}))).is_ok());
    }
}
