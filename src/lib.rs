//! daybook library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `db`: migrations and SQLite helpers
//! - `models`: typed records used across layers
//! - `util`: tracing setup

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
