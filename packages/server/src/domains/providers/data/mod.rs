pub mod provider;

pub use provider::{CreateProviderInput, ProviderData, UpdateProviderInput};
