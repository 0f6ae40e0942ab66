//! vpc schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::EC2::VPC
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Tag` property type for AWS::EC2::VPC
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

/// Returns the schema for AWS::EC2::VPC
pub fn vpc_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::VPC")
        .with_description("Specifies a virtual private cloud (VPC).")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html")
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("CidrBlock", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The IPv4 network range for the VPC, in CIDR notation. For example, 10.0.0.0/16. Required if you do not specify Ipv4IpamPoolId."),
        )
        .property(
            PropertySchema::new("EnableDnsHostnames", PropertyType::Boolean)
                .with_description("Indicates whether the instances launched in the VPC get DNS hostnames. You can only enable DNS hostnames if you enable DNS support. Default: false."),
        )
        .property(
            PropertySchema::new("EnableDnsSupport", PropertyType::Boolean)
                .with_description("Indicates whether the DNS resolution is supported for the VPC. Default: true."),
        )
        .property(
            PropertySchema::new("InstanceTenancy", PropertyType::String)
                .with_update_type(UpdateType::Conditional)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["default", "dedicated", "host"]),
                )
                .with_description("The allowed tenancy of instances launched into the VPC. Updating to 'default' requires no replacement; other updates require replacement."),
        )
        .property(
            PropertySchema::new("Ipv4IpamPoolId", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR."),
        )
        .property(
            PropertySchema::new("Ipv4NetmaskLength", PropertyType::Number)
                .with_update_type(UpdateType::Immutable)
                .with_description("The netmask length of the IPv4 CIDR you want to allocate to this VPC from an IPAM pool."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("The tags for the VPC."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_vpc_minimal() {
        let schema = vpc_schema();
        let attrs = props(json!({"CidrBlock": "10.0.0.0/16"}));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn valid_vpc_full() {
        let schema = vpc_schema();
        let attrs = props(json!({
            "CidrBlock": "10.0.0.0/16",
            "EnableDnsHostnames": true,
            "EnableDnsSupport": true,
            "InstanceTenancy": "default",
            "Tags": [{"Key": "Name", "Value": "main"}]
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn instance_tenancy_constraints_are_metadata_only() {
        let schema = vpc_schema();
        let tenancy = &schema.properties["InstanceTenancy"];
        assert_eq!(
            tenancy.constraints.allowed_values,
            vec!["default", "dedicated", "host"]
        );
        // Structural validation does not enforce the allowed values
        let attrs = props(json!({"InstanceTenancy": "shared"}));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn boolean_property_rejects_string() {
        let schema = vpc_schema();
        let attrs = props(json!({"EnableDnsSupport": "yes"}));
        assert!(schema.validate(&attrs).is_err());
    }
}
