// src/api/handlers/mod.rs
mod assets;
mod evaluate;
mod health;

pub use assets::{bundled_ui, BundledUi};
pub use evaluate::{evaluate, method_not_allowed};
pub use health::{health_check, API_VERSION, SERVICE_NAME};
