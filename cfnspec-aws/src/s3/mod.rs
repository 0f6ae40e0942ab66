//! Amazon S3 resource schemas

pub mod bucket;
