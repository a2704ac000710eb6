// src/lib.rs
pub mod api;
pub mod banner;
pub mod browser;
pub mod config;
pub mod errors;
pub mod grader;
pub mod models;
pub mod parser;
