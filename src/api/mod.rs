//! HTTP API module for the Roster Ranking Engine.
//!
//! This module provides the JSON endpoints the presentation layer calls to
//! compute final averages and rank class rosters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RankRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
