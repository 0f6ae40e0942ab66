//! cluster schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource provider schema: AWS::ECS::Cluster
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnspec-codegen

use cfnspec_core::schema::{
    Constraints, PropertyBagSchema, PropertySchema, PropertyType, ResourceTypeSchema, UpdateType,
};

/// The `ClusterSetting` property type for AWS::ECS::Cluster
fn cluster_setting_bag() -> PropertyBagSchema {
    PropertyBagSchema::new("ClusterSetting")
        .property(
            PropertySchema::new("Name", PropertyType::String)
                .with_constraints(Constraints::new().with_allowed_values(&["containerInsights"]))
                .with_description("The name of the cluster setting."),
        )
        .property(
            PropertySchema::new("Value", PropertyType::String)
                .with_constraints(
                    Constraints::new().with_allowed_values(&["enabled", "disabled", "enhanced"]),
                )
                .with_description("The value to set for the cluster setting."),
        )
}

/// The `Tag` property type for AWS::ECS::Cluster
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

/// Returns the schema for AWS::ECS::Cluster
pub fn cluster_schema() -> ResourceTypeSchema {
    ResourceTypeSchema::new("AWS::ECS::Cluster")
        .with_description("The AWS::ECS::Cluster resource creates an Amazon Elastic Container Service (Amazon ECS) cluster.")
        .with_documentation("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ecs-cluster.html")
        .property_bag(cluster_setting_bag())
        .property_bag(tag_bag())
        .property(
            PropertySchema::new("ClusterName", PropertyType::String)
                .with_update_type(UpdateType::Immutable)
                .with_description("A user-generated string that you use to identify your cluster. If you don't specify a name, AWS CloudFormation generates one."),
        )
        .property(
            PropertySchema::new(
                "CapacityProviders",
                PropertyType::List(Box::new(PropertyType::String)),
            )
            .with_description("The short name of one or more capacity providers to associate with the cluster."),
        )
        .property(
            PropertySchema::new(
                "ClusterSettings",
                PropertyType::List(Box::new(PropertyType::Named("ClusterSetting".to_string()))),
            )
            .with_description("The settings to use when creating a cluster, currently Container Insights."),
        )
        .property(
            PropertySchema::new(
                "Tags",
                PropertyType::List(Box::new(PropertyType::Named("Tag".to_string()))),
            )
            .with_description("The metadata that you apply to the cluster to help you categorize and organize it."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::props;
    use serde_json::json;

    #[test]
    fn valid_cluster() {
        let schema = cluster_schema();
        let attrs = props(json!({
            "ClusterName": "app",
            "ClusterSettings": [{"Name": "containerInsights", "Value": "enabled"}],
            "CapacityProviders": ["FARGATE", "FARGATE_SPOT"]
        }));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn cluster_settings_must_be_a_list() {
        let schema = cluster_schema();
        let attrs = props(json!({"ClusterSettings": {"Name": "containerInsights"}}));
        assert!(schema.validate(&attrs).is_err());
    }
}
