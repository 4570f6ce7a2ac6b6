pub mod config;
pub mod error;
pub mod health;
pub mod observability;
pub mod routes;

pub use routes::{app_router, AppState};
