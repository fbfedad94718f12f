//! Value Object Module

pub mod password;
pub mod username;
