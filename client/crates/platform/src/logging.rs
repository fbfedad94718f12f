//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer. `RUST_LOG` takes precedence over the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "platform=info,account=info,community=info,assistant=info";

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed (by an earlier
/// call or by the host application); the existing one is kept.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
