//! G-Limit Studio back office server library.
//!
//! Exposes the building blocks (config, state, error handling, proxy,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod router;
pub mod routes;
pub mod state;
pub mod upstream;
