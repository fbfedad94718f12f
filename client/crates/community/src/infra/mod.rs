//! Infrastructure Layer
//!
//! Gateway-backed repositories and the wire records they decode.

pub mod http;
pub mod wire;
