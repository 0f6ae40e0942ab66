//! AWS Glue resource schemas

pub mod job;
