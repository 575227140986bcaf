// HTTP server setup (Axum)
pub mod app;
pub mod extract;
pub mod routes;

pub use app::*;
