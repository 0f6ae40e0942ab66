//! subnet schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::EC2::Subnet
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Tag` property type for AWS::EC2::Subnet
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

/// Returns the schema for AWS::EC2::Subnet
pub fn subnet_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::Subnet")
        .with_description("Specifies a subnet for the specified VPC.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-subnet.html")
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .required()
                .with_update_type(UpdateType::Immutable)
                .with_description("The ID of the VPC the subnet is in."),
        )
        .property(
            PropertySchema::new("CidrBlock", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The IPv4 CIDR block assigned to the subnet. Required unless an IPAM pool allocates the block."),
        )
        .property(
            PropertySchema::new("AvailabilityZone", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The Availability Zone of the subnet."),
        )
        .property(
            PropertySchema::new("AvailabilityZoneId", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The AZ ID of the subnet."),
        )
        .property(
            PropertySchema::new("MapPublicIpOnLaunch", PropertyType::Boolean)
                .with_description("Indicates whether instances launched in this subnet receive a public IPv4 address. Default: false."),
        )
        .property(
            PropertySchema::new("AssignIpv6AddressOnCreation", PropertyType::Boolean)
                .with_description("Indicates whether a network interface created in this subnet receives an IPv6 address."),
        )
        .property(
            PropertySchema::new("Ipv6CidrBlock", PropertyType::String)
                .with_description("The IPv6 CIDR block. If you specify AssignIpv6AddressOnCreation, you must also specify an IPv6 CIDR block."),
        )
        .property(
            PropertySchema::new("EnableDns64", PropertyType::Boolean)
                .with_description("Indicates whether DNS queries made to the Amazon-provided DNS Resolver should return synthetic IPv6 addresses for IPv4-only destinations."),
        )
        .property(
            PropertySchema::new("OutpostArn", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The Amazon Resource Name (ARN) of the Outpost."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("Any tags assigned to the subnet."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_subnet() {
        let schema = subnet_schema();
        let attrs = props(json!({
            "VpcId": {"Ref": "Vpc"},
            "CidrBlock": "10.0.1.0/24",
            "AvailabilityZone": {"Fn::Select": [0, {"Fn::GetAZs": ""}]},
            "MapPublicIpOnLaunch": true
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn vpc_id_required() {
        let schema = subnet_schema();
        let attrs = props(json!({"CidrBlock": "10.0.1.0/24"}));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("VpcId"));
    }
}
