//! Amazon SQS resource schemas

pub mod queue;
