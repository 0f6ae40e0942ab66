//! instance schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::EC2::Instance
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `Ebs` property type for AWS::EC2::Instance
fn ebs_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Ebs")
        .property(
            PropertySchema::new("DeleteOnTermination", PropertyType::Boolean)
                .with_description("Indicates whether the EBS volume is deleted on instance termination. Default: true."),
        )
        .property(
            PropertySchema::new("Encrypted", PropertyType::Boolean)
                .with_description("Indicates whether the volume should be encrypted."),
        )
        .property(
            PropertySchema::new("Iops", PropertyType::Number)
                .with_description("The number of I/O operations per second (IOPS). Required for io1 and io2 volumes."),
        )
        .property(
            PropertySchema::new("KmsKeyId", PropertyType::String)
                .with_description("The identifier of the KMS key to use for Amazon EBS encryption."),
        )
        .property(
            PropertySchema::new("SnapshotId", PropertyType::String)
                .with_description("The ID of the snapshot."),
        )
        .property(
            PropertySchema::new("VolumeSize", PropertyType::Number)
                .with_description("The size of the volume, in GiBs. You must specify either a snapshot ID or a volume size."),
        )
        .property(
            PropertySchema::new("VolumeType", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&[
                    "gp2", "gp3", "io1", "io2", "sc1", "st1", "standard",
                ]))
                .with_description("The volume type. Default: gp2."),
        )
}

/// The `BlockDeviceMapping` property type for AWS::EC2::Instance
fn block_device_mapping_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("BlockDeviceMapping")
        .property(
            PropertySchema::new("DeviceName", PropertyType::String)
                .required()
                .with_description("The device name (for example, /dev/sdh or xvdh)."),
        )
        .property(
            PropertySchema::new("Ebs", PropertyType::Named("Ebs".to_string()))
                .with_description("Parameters used to automatically set up EBS volumes when the instance is launched."),
        )
        .property(
            PropertySchema::new("VirtualName", PropertyType::String)
                .with_description("The virtual device name (ephemeralN)."),
        )
        .property(
            PropertySchema::new("NoDevice", PropertyType::Json)
                .with_description("To omit the device from the block device mapping, specify an empty string."),
        )
}

/// The `Tag` property type for AWS::EC2::Instance
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

/// Returns the schema for AWS::EC2::Instance
pub fn instance_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::EC2::Instance")
        .with_description("Specifies an EC2 instance.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-instance.html")
        .property_bag(ebs_bag())
        .property_bag(block_device_mapping_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("ImageId", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The ID of the AMI. Required unless you launch from a launch template that specifies one."),
        )
        .property(
            PropertySchema::new("InstanceType", PropertyType::String)
                .with_update_type(UpdateType::Conditional)
                .with_description("The instance type, for example t3.micro."),
        )
        .property(
            PropertySchema::new("KeyName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The name of the key pair."),
        )
        .property(
            PropertySchema::new("SubnetId", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The ID of the subnet to launch the instance into."),
        )
        .property(
            PropertySchema::new("AvailabilityZone", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The Availability Zone of the instance."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroupIds",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_update_type(UpdateType::Conditional)
            .with_description("The IDs of the security groups. Required for instances in a nondefault VPC."),
        )
        .property(
            PropertySchema::new(
                "BlockDeviceMappings",
                PropertyType::List(Box::new(PropertyType::Named(
                    "BlockDeviceMapping".to_string(),
                ))),
            )
            .with_update_type(UpdateType::Conditional)
            .with_description("The block device mapping entries. Changing only DeleteOnTermination updates in place; other changes replace the instance."),
        )
        .property(
            PropertySchema::new("UserData", PropertyType::String)
                .with_update_type(UpdateType::Conditional)
                .with_description("The user data script, base64-encoded."),
        )
        .property(
            PropertySchema::new("IamInstanceProfile", PropertyType::String)
                .with_description("The name of an IAM instance profile."),
        )
        .property(
            PropertySchema::new("Monitoring", PropertyType::Boolean)
                .with_description("Specifies whether detailed monitoring is enabled for the instance."),
        )
        .property(
            PropertySchema::new("EbsOptimized", PropertyType::Boolean)
                .with_update_type(UpdateType::Conditional)
                .with_description("Indicates whether the instance is optimized for Amazon EBS I/O."),
        )
        .property(
            PropertySchema::new("Tenancy", PropertyType::String)
                .with_update_type(UpdateType::Conditional)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["default", "dedicated", "host"]),
                )
                .with_description("The tenancy of the instance."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("The tags to add to the instance."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_instance_with_block_devices() {
        let schema = instance_schema();
        let attrs = props(json!({
            "ImageId": "ami-0123456789abcdef0",
            "InstanceType": "t3.micro",
            "SubnetId": {"Ref": "Subnet"},
            "SecurityGroupIds": [{"Ref": "WebSg"}],
            "BlockDeviceMappings": [
                {
                    "DeviceName": "/dev/xvda",
                    "Ebs": {"VolumeSize": 20, "VolumeType": "gp3", "Encrypted": true}
                }
            ],
            "UserData": {"Fn::Base64": {"Fn::Sub": "#!/bin/bash\necho ${AWS::Region}"}}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn block_device_requires_device_name() {
        let schema = instance_schema();
        let attrs = props(json!({
            "BlockDeviceMappings": [{"Ebs": {"VolumeSize": 20}}]
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("DeviceName"));
    }

    #[test]
    fn nested_bag_type_error_carries_path() {
        let schema = instance_schema();
        let attrs = props(json!({
            "BlockDeviceMappings": [
                {"DeviceName": "/dev/xvda", "Ebs": {"VolumeSize": "twenty"}}
            ]
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        let message = errors[0].to_string();
        assert!(message.contains("Ebs"), "unexpected message: {}", message);
        assert!(
            message.contains("VolumeSize"),
            "unexpected message: {}",
            message
        );
    }
}
