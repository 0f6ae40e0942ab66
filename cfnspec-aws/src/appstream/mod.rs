//! Amazon AppStream 2.0 resource schemas

pub mod fleet;
