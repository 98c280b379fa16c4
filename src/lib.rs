//! HTTP gateway serving workout recommendations from a built-in catalog and
//! proxying profile-based requests to a remote recommendation service.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::GatewayError;
