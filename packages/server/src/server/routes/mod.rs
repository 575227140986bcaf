// HTTP routes
pub mod health;
pub mod providers;
pub mod service_areas;

pub use health::*;
pub use providers::*;
pub use service_areas::*;
