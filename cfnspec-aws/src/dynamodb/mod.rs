//! Amazon DynamoDB resource schemas

pub mod table;
