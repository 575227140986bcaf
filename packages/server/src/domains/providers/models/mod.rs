pub mod provider;

pub use provider::{CreateProvider, Provider, UpdateProvider};
