//! HTTP server for the Roster student records service.
//!
//! Serves CRUD over a single in-memory `students` collection. Every request
//! is resolved by [`Route::resolve`] and handled against a shared
//! [`roster_store::StudentStore`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use router::{build_router, Route, ROUTES};
pub use server::RosterServer;
