//! Web layer for the fare administration server.
//!
//! Provides the HTTP endpoints the admin client uses to read, edit and
//! preview fare tables.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
