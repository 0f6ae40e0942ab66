//! AWS Lambda resource schemas

pub mod function;
