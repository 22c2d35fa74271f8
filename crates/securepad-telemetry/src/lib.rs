//! Logging setup for SecurePad hosts.
//!
//! Components log through `tracing` with a bracketed component tag
//! (`[AutoSave] ...`). [`init_tracing`] installs a formatted stderr layer
//! filtered by `RUST_LOG` and, optionally, a [`PadEventLayer`] that forwards
//! warnings to the UI regardless of that filter.

pub mod tracing_layer;

pub use tracing_layer::{PadEventLayer, PadLogEvent};

use tokio::sync::mpsc;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber with [`DEFAULT_FILTER`].
pub fn init_tracing(events: Option<mpsc::UnboundedSender<PadLogEvent>>) -> Result<(), TryInitError> {
    init_tracing_with_filter(DEFAULT_FILTER, events)
}

/// Installs the global subscriber.
///
/// # Arguments
///
/// * `default_filter` - Directive used when `RUST_LOG` is unset or invalid
/// * `events` - Optional channel receiving [`PadLogEvent`]s for the UI
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing_with_filter(
    default_filter: &str,
    events: Option<mpsc::UnboundedSender<PadLogEvent>>,
) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // The filter only applies to the formatted output; the event layer keeps
    // its own minimum level.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(events.map(PadEventLayer::new))
        .try_init()
}
