//! Observable events for campus
//!
//! Every log line carries an `event` field naming one of these, so logs can
//! be filtered by lifecycle step without parsing messages.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Tables bootstrapped
    SchemaReady,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown complete
    ShutdownComplete,

    // Request processing
    /// The store failed in a way no handler could classify
    StoreFailure,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "CAMPUS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaReady => "SCHEMA_READY",
            Event::Serving => "CAMPUS_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::StoreFailure)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
