//! service schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::ECS::Service
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `AwsVpcConfiguration` property type for AWS::ECS::Service
fn aws_vpc_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("AwsVpcConfiguration")
        .property(
            PropertySchema::new("Subnets", PropertyType::List(Box::new(PropertyType::String)))
                .required()
                .with_description("The IDs of the subnets associated with the task or service. There is a limit of 16 subnets."),
        )
        .property(
            PropertySchema::new(
                "SecurityGroups",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The IDs of the security groups associated with the task or service. There is a limit of 5 security groups."),
        )
        .property(
            PropertySchema::new("AssignPublicIp", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&["ENABLED", "DISABLED"]))
                .with_description("Whether the task's elastic network interface receives a public IP address."),
        )
}

/// The `NetworkConfiguration` property type for AWS::ECS::Service
fn network_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("NetworkConfiguration").property(
        PropertySchema::new(
            "AwsvpcConfiguration",
            PropertyType::Named("AwsVpcConfiguration".to_string()),
        )
        .with_description("The VPC subnets and security groups that are associated with a task."),
    )
}

/// The `LoadBalancer` property type for AWS::ECS::Service
fn load_balancer_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("LoadBalancer")
        .property(
            PropertySchema::new("ContainerName", PropertyType::String)
                .with_description("The name of the container (as it appears in a container definition) to associate with the load balancer."),
        )
        .property(
            PropertySchema::new("ContainerPort", PropertyType::Number)
                .with_description("The port on the container to associate with the load balancer."),
        )
        .property(
            PropertySchema::new("TargetGroupArn", PropertyType::String)
                .with_description("The full ARN of the Elastic Load Balancing target group associated with a service or task set."),
        )
        .property(
            PropertySchema::new("LoadBalancerName", PropertyType::String)
                .with_description("The name of the load balancer to associate with the service or task set."),
        )
}

/// The `DeploymentConfiguration` property type for AWS::ECS::Service
fn deployment_configuration_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("DeploymentConfiguration")
        .property(
            PropertySchema::new("MaximumPercent", PropertyType::Number)
                .with_description("The upper limit on the number of tasks in a service that are allowed in the RUNNING or PENDING state during a deployment, as a percentage of DesiredCount."),
        )
        .property(
            PropertySchema::new("MinimumHealthyPercent", PropertyType::Number)
                .with_description("The lower limit on the number of tasks in a service that must remain in the RUNNING state during a deployment, as a percentage of DesiredCount."),
        )
}

/// The `Tag` property type for AWS::ECS::Service
fn tag_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("Tag")
        .property(
            PropertySchema::new("Key", PropertyType::String)
                .with_description("One part of a key-value pair that makes up a tag."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .with_description("The optional part of a key-value pair that makes up a tag."),
        )
}

/// Returns the schema for AWS::ECS::Service
pub fn service_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::ECS::Service")
        .with_description("The AWS::ECS::Service resource creates an Amazon Elastic Container Service (Amazon ECS) service that runs and maintains the requested number of tasks and associated load balancers.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ecs-service.html")
        .property_bag(aws_vpc_configuration_bag())
        .property_bag(network_configuration_bag())
        .property_bag(load_balancer_bag())
        .property_bag(deployment_configuration_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("ServiceName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The name of your service, up to 255 letters, numbers, underscores and hyphens."),
        )
        .property(
            PropertySchema::new("Cluster", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The short name or full ARN of the cluster that you run your service on. If you do not specify a cluster, the default cluster is assumed."),
        )
        .property(
            PropertySchema::new("TaskDefinition", PropertyType::String)
                .with_description("The family and revision (family:revision) or full ARN of the task definition to run in your service."),
        )
        .property(
            PropertySchema::new("DesiredCount", PropertyType::Number)
                .with_description("The number of instantiations of the specified task definition to place and keep running in your service."),
        )
        .property(
            PropertySchema::new("LaunchType", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["EC2", "FARGATE", "EXTERNAL"]),
                )
                .with_description("The launch type on which to run your service."),
        )
        .property(
            PropertySchema::new("SchedulingStrategy", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_constraints(Constraints::new().with_allowed_values(&["REPLICA", "DAEMON"]))
                .with_description("The scheduling strategy to use for the service."),
        )
        .property(
            PropertySchema::new("PlatformVersion", PropertyType::String)
                .with_description("The platform version that your tasks in the service are running on. Default: LATEST."),
        )
        .property(
            PropertySchema::new(
                "NetworkConfiguration",
                PropertyType::Named("NetworkConfiguration".to_string()),
            )
            .with_description("The network configuration for the service. Required for task definitions that use the awsvpc network mode."),
        )
        .property(
            PropertySchema::new(
                "LoadBalancers",
                PropertyType::List(Box::new(PropertyType::Named("LoadBalancer".to_string()))),
            )
            .with_description("A list of load balancer objects to associate with the service."),
        )
        .property(
            PropertySchema::new(
                "DeploymentConfiguration",
                PropertyType::Named("DeploymentConfiguration".to_string()),
            )
            .with_description("Optional deployment parameters that control how many tasks run during the deployment and the ordering of stopping and starting tasks."),
        )
        .property(
            PropertySchema::new("EnableExecuteCommand", PropertyType::Boolean)
                .with_description("Determines whether the execute command functionality is turned on for the service."),
        )
        .property(
            PropertySchema::new("Role", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("The name or full ARN of the IAM role that allows Amazon ECS to make calls to your load balancer on your behalf. Only permitted without a service-linked role."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("The metadata that you apply to the service to help you categorize and organize them."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_fargate_service() {
        let schema = service_schema();
        let attrs = props(json!({
            "ServiceName": "api",
            "Cluster": {"Ref": "Cluster"},
            "TaskDefinition": {"Ref": "TaskDef"},
            "DesiredCount": 2,
            "LaunchType": "FARGATE",
            "NetworkConfiguration": {
                "AwsvpcConfiguration": {
                    "Subnets": [{"Ref": "SubnetA"}, {"Ref": "SubnetB"}],
                    "SecurityGroups": [{"Ref": "ServiceSg"}],
                    "AssignPublicIp": "DISABLED"
                }
            },
            "DeploymentConfiguration": {"MaximumPercent": 200, "MinimumHealthyPercent": 100}
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn awsvpc_configuration_requires_subnets() {
        let schema = service_schema();
        let attrs = props(json!({
            "NetworkConfiguration": {"AwsvpcConfiguration": {"AssignPublicIp": "DISABLED"}}
        }));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("Subnets"));
    }

    #[test]
    fn doubly_nested_bag_resolves() {
        // NetworkConfiguration -> AwsVpcConfiguration is a bag inside a bag
        let schema = service_schema();
        assert!(schema.check_integrity().is_ok());
    }
}
