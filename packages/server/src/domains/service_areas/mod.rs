//! Service areas domain - priced geographic regions owned by a provider

pub mod activities;
pub mod data;
pub mod geolocation;
pub mod models;

// Re-export commonly used types
pub use data::{CreateServiceAreaInput, LocationQuery, ServiceAreaData, UpdateServiceAreaInput};
pub use geolocation::{find_areas_containing, LocationMatch};
pub use models::{CreateServiceArea, ServiceArea, ServiceAreaWithProvider, UpdateServiceArea};
