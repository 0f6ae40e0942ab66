//! security_group schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::EC2::SecurityGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Ingress` property type for AWS::EC2::SecurityGroup
fn ingress_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Ingress")
        .property(
            PropertySchema::new("IpProtocol", PropertyType::String)
                .required()
                .with_description("The IP protocol name (tcp, udp, icmp, icmpv6) or number. Use -1 to specify all protocols."),
        )
        .property(
            PropertySchema::new("CidrIp", PropertyType::String)
                .with_description("The IPv4 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("CidrIpv6", PropertyType::String)
                .with_description("The IPv6 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_description("Updates the description of an ingress (inbound) security group rule."),
        )
        .property(
            PropertySchema::new("FromPort", PropertyType::Number)
                .with_description("The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number."),
        )
        .property(
            PropertySchema::new("ToPort", PropertyType::Number)
                .with_description("The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupId", PropertyType::String)
                .with_description("The ID of the security group to allow access to."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupName", PropertyType::String)
                .with_description("[Default VPC] The name of the source security group."),
        )
        .property(
            PropertySchema::new("SourceSecurityGroupOwnerId", PropertyType::String)
                .with_description("The AWS account ID that owns the source security group."),
        )
        .property(
            PropertySchema::new("SourcePrefixListId", PropertyType::String)
                .with_description("The ID of a prefix list to allow access from."),
        )
}

/// The `Egress` property type for AWS::EC2::SecurityGroup
fn egress_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Egress")
        .property(
            PropertySchema::new("IpProtocol", PropertyType::String)
                .required()
                .with_description("The IP protocol name (tcp, udp, icmp, icmpv6) or number. Use -1 to specify all protocols."),
        )
        .property(
            PropertySchema::new("CidrIp", PropertyType::String)
                .with_description("The IPv4 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("CidrIpv6", PropertyType::String)
                .with_description("The IPv6 address range, in CIDR format."),
        )
        .property(
            PropertySchema::new("Description", PropertyType::String)
                .with_description("The description of an egress (outbound) security group rule."),
        )
        .property(
            PropertySchema::new("FromPort", PropertyType::Number)
                .with_description("The start of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 type number."),
        )
        .property(
            PropertySchema::new("ToPort", PropertyType::Number)
                .with_description("The end of port range for the TCP and UDP protocols, or an ICMP/ICMPv6 code."),
        )
        .property(
            PropertySchema::new("DestinationSecurityGroupId", PropertyType::String)
                .with_description("The ID of the destination VPC security group."),
        )
        .property(
            PropertySchema::new("DestinationPrefixListId", PropertyType::String)
                .with_description("The prefix list IDs for an AWS service."),
        )
}

/// The `Tag` property type for AWS::EC2::SecurityGroup
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

/// Returns the schema for AWS::EC2::SecurityGroup
pub fn security_group_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::SecurityGroup")
        .with_description("Resource Type definition for AWS::EC2::SecurityGroup")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-securitygroup.html")
        .property_bag(ingress_bag())
        .property_bag(egress_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("GroupDescription", PropertyType::String)
                .required()
                .with_update_type(UpdateType::Immutable)
                .with_description("A description for the security group. Up to 255 characters in length."),
        )
        .property(
            PropertySchema::new("GroupName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The name of the security group. Names are case-insensitive and must be unique within the VPC."),
        )
        .property(
            PropertySchema::new("VpcId", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The ID of the VPC for the security group. If you do not specify a VPC, the group is created in the default VPC."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroupIngress",
                PropertyType::List(Box::new(PropertyType::Named("Ingress".to_string()))),
            )
            .with_description("The inbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroupEgress",
                PropertyType::List(Box::new(PropertyType::Named("Egress".to_string()))),
            )
            .with_description("[VPC only] The outbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("Any tags assigned to the security group."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn group_description_required_vpc_id_optional() {
        let schema = security_group_schema();
        let description = &schema.properties["GroupDescription"];
        let vpc_id = &schema.properties["VpcId"];
        assert!(description.required);
        assert!(!vpc_id.required);
    }

    #[test]
    fn valid_security_group() {
        let schema = security_group_schema();
        let attrs = props(json!({
            "GroupDescription": "web tier",
            "VpcId": {"Ref": "Vpc"},
            "SecurityGroupIngress": [
                {"IpProtocol": "tcp", "FromPort": 443, "ToPort": 443, "CidrIp": "0.0.0.0/0"}
            ],
            "Tags": [{"Key": "Name", "Value": "web-sg"}]
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn ingress_without_protocol_fails() {
        let schema = security_group_schema();
        let attrs = props(json!({
            "GroupDescription": "web tier",
            "SecurityGroupIngress": [{"FromPort": 443, "ToPort": 443}]
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("IpProtocol"));
    }

    #[test]
    fn missing_group_description_fails() {
        let schema = security_group_schema();
        let attrs = props(json!({"GroupName": "web"}));
        assert!(schema.validate(&attrs).is_err());
    }
}
