//! Observability for the students API
//!
//! Structured logs through `tracing`; request spans come from the HTTP
//! server's trace layer.

mod logger;

pub use logger::{init_logging, LogFormat, LoggingConfig};
