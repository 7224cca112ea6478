//! Minniemissions Gateway - the HTTP surface over the domain store,
//! wallet sessions, and fandom oracle

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_router, start_gateway};
pub use state::AppState;
