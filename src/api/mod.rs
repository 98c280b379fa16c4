// API routes and handlers

pub mod health;
pub mod middleware;
pub mod recommendations;
pub mod routes;

pub use routes::{create_routes, AppState};
