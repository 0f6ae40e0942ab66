//! Amazon EC2 resource schemas

pub mod instance;
pub mod security_group;
pub mod subnet;
pub mod vpc;
