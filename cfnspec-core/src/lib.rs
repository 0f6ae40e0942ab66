//! cfnspec Core
//!
//! Schema metadata model for CloudFormation resource types: property schemas,
//! property bags, the intrinsic-function value union, the shared resource
//! attributes base, and template parsing/validation.

pub mod attributes;
pub mod schema;
pub mod template;
pub mod value;
