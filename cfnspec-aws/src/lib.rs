//! cfnspec AWS schema corpus
//!
//! One module per CloudFormation resource type, grouped by service. Each
//! module defines the resource's property bags and a `<resource>_schema()`
//! constructor returning the full `ResourceTypeSchema`.
//!
//! ## Module Structure
//!
//! - one directory per AWS service (`ec2`, `s3`, `iam`, ...)
//! - one file per resource type inside it
//! - `all_schemas()` / `registry()` aggregate the whole corpus

pub mod appstream;
pub mod dynamodb;
pub mod ec2;
pub mod ecs;
pub mod glue;
pub mod iam;
pub mod lambda;
pub mod s3;
pub mod sqs;
pub mod stepfunctions;

use cfnspec_core::schema::{ResourceTypeSchema, SchemaRegistry};

/// Returns every schema in the corpus
pub fn all_schemas() -> Vec<ResourceTypeSchema> {
    vec![
        appstream::fleet::fleet_schema(),
        dynamodb::table::table_schema(),
        ec2::instance::instance_schema(),
        ec2::security_group::security_group_schema(),
        ec2::subnet::subnet_schema(),
        ec2::vpc::vpc_schema(),
        ecs::cluster::cluster_schema(),
        ecs::service::service_schema(),
        glue::job::job_schema(),
        iam::managed_policy::managed_policy_schema(),
        iam::role::role_schema(),
        lambda::function::function_schema(),
        s3::bucket::bucket_schema(),
        sqs::queue::queue_schema(),
        stepfunctions::state_machine::state_machine_schema(),
    ]
}

/// Registry over the whole corpus, keyed by CloudFormation type name
pub fn registry() -> SchemaRegistry {
    SchemaRegistry::from_schemas(all_schemas())
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::collections::HashMap;

    use cfnspec_core::value::Value;

    /// Build a property map from template-style JSON
    pub fn props(json: serde_json::Value) -> HashMap<String, Value> {
        match Value::from_json(&json).expect("valid property JSON") {
            Value::Map(map) => map,
            other => panic!("expected a JSON object, got {}", other.type_name()),
        }
    }
}
