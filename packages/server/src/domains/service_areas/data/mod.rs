pub mod service_area;

pub use service_area::{
    CreateServiceAreaInput, LocationQuery, ServiceAreaData, UpdateServiceAreaInput,
};
