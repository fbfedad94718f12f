//! Value Object Module

pub mod duration;
pub mod exchange_status;
pub mod location_type;
pub mod vote_direction;
