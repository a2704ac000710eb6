// src/api/mod.rs
pub mod routes;
pub mod handlers;

pub use routes::{configure_routes, configure_ui};
