//! Observability for campus
//!
//! Structured JSON logs through `tracing`. One log line is one event, and
//! every line carries an `event` field from [`Event`].
//!
//! # Usage
//!
//! ```ignore
//! use campus::observability::{self, Event};
//!
//! observability::init_logging("info");
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:4000");
//! ```

mod events;

pub use events::Event;

use tracing_subscriber::EnvFilter;

/// Installs the global JSON subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_current_span(false)
        .with_env_filter(filter)
        .try_init();
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::error!(event = %event);
    } else {
        tracing::info!(event = %event);
    }
}
