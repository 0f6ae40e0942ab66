//! Amazon ECS resource schemas

pub mod cluster;
pub mod service;
