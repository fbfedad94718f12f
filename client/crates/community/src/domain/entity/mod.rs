//! Entity Module

pub mod comment;
pub mod event;
pub mod exchange_request;
pub mod exchange_response;
pub mod post;
