//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of client vocabulary:
//! - Error taxonomy and result aliases
//! - Typed identifiers for backend records
//! - Form input rules (list splitting, numeric defaults, required fields)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across every page.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod input;
