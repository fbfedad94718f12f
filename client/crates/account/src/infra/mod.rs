//! Infrastructure Layer
//!
//! Gateway-backed implementation of the user repository.

pub mod http;

pub use http::HttpUserRepository;
