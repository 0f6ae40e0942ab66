//! AWS Step Functions resource schemas

pub mod state_machine;
