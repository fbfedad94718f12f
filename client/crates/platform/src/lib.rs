//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client-side foundations shared by every
//! resource family:
//! - Configuration (base URL, generative endpoint, storage location)
//! - Token Store (single persisted bearer credential)
//! - HTTP Gateway (the only path to the backend REST API)
//! - Notification Sink (user-visible success/failure notices)
//! - View Binding state machine (`Loading -> Loaded | Failed`)
//! - Logging initialization

pub mod client;
pub mod config;
pub mod logging;
pub mod notify;
pub mod storage;
pub mod view;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

pub use client::{Gateway, GatewayError, HttpGateway, LocalGateway, Method};
pub use config::{ClientConfig, ConfigError};
pub use notify::{Level, Notice, NotificationSink, RecordingSink, TracingSink};
pub use storage::{Credential, FileTokenStore, MemoryTokenStore, TokenStore};
pub use view::{Collection, Draft, LoadState};
