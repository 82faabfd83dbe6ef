//! Subscriber initialisation.

pub mod events;
pub mod spans;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use plateguard_core::config::ObservabilityConfig;

/// Outcome of [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingInit {
    Installed,
    /// A global subscriber was already set; the existing one stays.
    AlreadySet,
}

/// Install a global `tracing` subscriber. `RUST_LOG` overrides the
/// configured level. Safe to call more than once.
pub fn init_tracing(config: &ObservabilityConfig) -> TracingInit {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    match result {
        Ok(()) => TracingInit::Installed,
        Err(_) => TracingInit::AlreadySet,
    }
}
