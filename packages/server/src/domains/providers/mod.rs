//! Providers domain - entities that offer services

pub mod activities;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{CreateProviderInput, ProviderData, UpdateProviderInput};
pub use models::{CreateProvider, Provider, UpdateProvider};
