// Business domains
pub mod providers;
pub mod service_areas;
