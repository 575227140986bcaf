pub mod service_area;

pub use service_area::{
    CreateServiceArea, ServiceArea, ServiceAreaWithProvider, UpdateServiceArea,
};
