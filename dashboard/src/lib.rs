//! Goodbooks analytics dashboard.
//!
//! An actix-web service with two JSON APIs, `/api/graph` over Neo4j and
//! `/api/sql` over MySQL, plus the dashboard page that drives them. Both
//! databases sit behind traits so the handlers run against any
//! implementation.

pub mod charts;
pub mod errors;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use routes::configure_routes;
pub use state::AppState;

pub const SERVICE_NAME: &str = "goodbooks-dashboard";
