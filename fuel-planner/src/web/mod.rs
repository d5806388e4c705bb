//! Web layer for the fuel stop planner.
//!
//! Provides HTTP endpoints for planning fuel stops along a supplied route
//! and for nearest-station lookups.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
