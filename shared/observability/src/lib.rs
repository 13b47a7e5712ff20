//! Goodbooks observability library
//!
//! Structured logging setup, per-request trace context, HTTP request logging
//! middleware and query timing helpers shared by the dashboard crates.

pub mod init;
pub mod middleware;
pub mod query_log;
pub mod trace_context;

pub use init::*;
pub use middleware::*;
pub use query_log::*;
pub use trace_context::*;

// Re-export tracing for convenience
pub use tracing::{debug, error, info, warn, Instrument};
