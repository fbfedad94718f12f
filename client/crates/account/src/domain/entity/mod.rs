//! Entity Module

pub mod new_account;
pub mod user_profile;
