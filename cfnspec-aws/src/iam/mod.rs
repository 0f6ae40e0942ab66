//! AWS IAM resource schemas

pub mod managed_policy;
pub mod role;
