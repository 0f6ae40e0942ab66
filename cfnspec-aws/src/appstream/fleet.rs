//! fleet schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::AppStream::Fleet
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `ComputeCapacity` property type for AWS::AppStream::Fleet
fn compute_capacity_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ComputeCapacity")
        .property(
            PropertySchema::new("DesiredInstances", PropertyType::Number)
                .with_description("The desired number of streaming instances."),
        )
        .property(
            PropertySchema::new("DesiredSessions", PropertyType::Number)
                .with_description("The desired number of user sessions for a multi-session fleet."),
        )
}

/// The `VpcConfig` property type for AWS::AppStream::Fleet
fn vpc_config_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("VpcConfig")
        .property(
            PropertySchema::new(
                "SubnetIds",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The identifiers of the subnets to which a network interface is attached from the fleet instance."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroupIds",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The identifiers of the security groups for the fleet. Maximum of 5."),
        )
}

/// The `DomainJoinInfo` property type for AWS::AppStream::Fleet
fn domain_join_info_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("DomainJoinInfo")
        .property(
            PropertySchema::new("DirectoryName", PropertyType::String)
                .with_description("The fully qualified name of the directory (for example, corp.example.com)."),
        )
        .property(
            PropertySchema::new("OrganizationalUnitDistinguishedName", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(2000))
                .with_description("The distinguished name of the organizational unit for computer accounts."),
        )
}

/// The `S3Location` property type for AWS::AppStream::Fleet
fn s3_location_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("S3Location")
        .property(
            PropertySchema::new("S3Bucket", PropertyType::String)
                .required()
                .with_description("The S3 bucket of the S3 object."),
        )
        .property(
            PropertySchema::new("S3Key", PropertyType::String)
                .with_description("The S3 key of the S3 object."),
        )
}

/// The `Tag` property type for AWS::AppStream::Fleet
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

/// Returns the schema for AWS::AppStream::Fleet
pub fn fleet_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::AppStream::Fleet")
        .with_description("Resource Type definition for AWS::AppStream::Fleet.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appstream-fleet.html")
        .property_bag(compute_capacity_bag())
        .property_bag(vpc_config_bag())
        .property_bag(domain_join_info_bag())
        .property_bag(s3_location_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("Name", PropertyType::String)
                .required()
                .with_update_type(UpdateType::Immutable)
                .with_description("A unique name for the fleet."),
        )
        .property(
            PropertySchema::new("InstanceType", PropertyType::String)
                .required()
                .with_description("The instance type to use when launching fleet instances, for example stream.standard.medium."),
        )
        .property(
            PropertySchema::new(
                "ComputeCapacity",
                PropertyType::Named("ComputeCapacity".to_string()),
            )
            .with_description("The desired capacity for the fleet. This is not allowed for Elastic fleets."),
        )
        .property(
            PropertySchema::new("FleetType", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["ALWAYS_ON", "ON_DEMAND", "ELASTIC"]),
                )
                .with_description("The fleet type."),
        )
        .property(
            PropertySchema::new("ImageArn", PropertyType::String)
                .with_description("The ARN of the public, private, or shared image to use."),
        )
        .property(
            PropertySchema::new("ImageName", PropertyType::String)
                .with_description("The name of the image used to create the fleet."),
        )
        .property(
            PropertySchema::new("VpcConfig", PropertyType::Named("VpcConfig".to_string()))
                .with_description("The VPC configuration for the fleet. This is required for Elastic fleets, but not allowed for other fleet types."),
        )
        .property(
            PropertySchema::new("MaxUserDurationInSeconds", PropertyType::Number)
                .with_description("The maximum amount of time that a streaming session can remain active, in seconds."),
        )
        .property(
            PropertySchema::new("DisconnectTimeoutInSeconds", PropertyType::Number)
                .with_description("The amount of time that a streaming session remains active after users disconnect."),
        )
        .property(
            PropertySchema::new("IdleDisconnectTimeoutInSeconds", PropertyType::Number)
                .with_description("The amount of time that users can be idle (inactive) before they are disconnected from their streaming session."),
        )
        .property(
            PropertySchema::new(
                "DomainJoinInfo",
                PropertyType::Named("DomainJoinInfo".to_string()),
            )
            .with_description("The name of the directory and organizational unit (OU) to use to join the fleet to a Microsoft Active Directory domain."),
        )
        .property(
            PropertySchema::new("EnableDefaultInternetAccess", PropertyType::Boolean)
                .with_description("Enables or disables default internet access for the fleet."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(256))
                .with_description("The description to display."),
        )
        .property(
            PropertySchema::new("DisplayName", PropertyType::String)
                .with_constraints(Constraints::new().with_max_length(100))
                .with_description("The fleet name to display."),
        )
        .property(
            PropertySchema::new("Platform", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "WINDOWS",
                    "WINDOWS_SERVER_2016",
                    "WINDOWS_SERVER_2019",
                    "WINDOWS_SERVER_2022",
                    "AMAZON_LINUX2",
                ]))
                .with_description("The platform of the fleet. Platform is required for Elastic fleets."),
        )
        .property(
            PropertySchema::new("StreamView", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&["APP", "DESKTOP"]))
                .with_description("The AppStream 2.0 view that is displayed to your users when they stream from the fleet."),
        )
        .property(
            PropertySchema::new(
                "UsbDeviceFilterStrings",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The USB device filter strings that specify which USB devices a user can redirect to the fleet streaming session."),
        )
        .property(
            PropertySchema::new(
                "SessionScriptS3Location",
                PropertyType::Named("S3Location".to_string()),
            )
            .with_description("The S3 location of the session scripts configuration zip file. This only applies to Elastic fleets."),
        )
        .property(
            PropertySchema::new("IamRoleArn", PropertyType::String)
                .with_constraints(
                    Constraints::new()
                        .with_pattern("^arn:aws(?:\\-cn|\\-iso\\-b|\\-iso|\\-us\\-gov)?:[A-Za-z0-9][A-Za-z0-9_/.-]{0,62}:[A-Za-z0-9_/.-]{0,63}:[A-Za-z0-9_/.-]{0,63}:[A-Za-z0-9][A-Za-z0-9:_/+=,@.\\\\-]{0,1023}$"),
                )
                .with_description("The ARN of the IAM role that is applied to the fleet."),
        )
        .property(
            PropertySchema::new("MaxConcurrentSessions", PropertyType::Number)
                .with_description("The maximum number of concurrent sessions for the fleet."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("An array of key-value pairs."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_elastic_fleet() {
        let schema = fleet_schema();
        let attrs = props(json!({
            "Name": "design-apps",
            "InstanceType": "stream.standard.medium",
            "FleetType": "ELASTIC",
            "Platform": "AMAZON_LINUX2",
            "MaxConcurrentSessions": 25,
            "VpcConfig": {
                "SubnetIds": [{"Ref": "SubnetA"}],
                "SecurityGroupIds": [{"Ref": "FleetSg"}]
            },
            "SessionScriptS3Location": {"S3Bucket": "scripts", "S3Key": "session.zip"}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn name_and_instance_type_required() {
        let schema = fleet_schema();
        let errors = schema.validate(&props(json!({}))).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(messages.iter().any(|m| m.contains("Name")));
        assert!(messages.iter().any(|m| m.contains("InstanceType")));
    }

    #[test]
    fn session_script_location_requires_bucket() {
        let schema = fleet_schema();
        let attrs = props(json!({
            "Name": "f",
            "InstanceType": "stream.standard.medium",
            "SessionScriptS3Location": {"S3Key": "session.zip"}
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("S3Bucket"));
    }
}
