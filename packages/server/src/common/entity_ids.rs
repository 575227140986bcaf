//! Typed ID definitions for all domain entities.
//!
//! # Example
//!
//! ```rust
//! use service_areas_core::common::{ProviderId, ServiceAreaId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let provider_id = ProviderId::from_raw(1);
//! let area_id = ServiceAreaId::from_raw(1);
//!
//! // This would be a compile error:
//! // let wrong: ServiceAreaId = provider_id;
//! # let _ = (provider_id, area_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Provider entities.
pub struct Provider;

/// Marker type for ServiceArea entities.
pub struct ServiceArea;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Provider entities.
pub type ProviderId = Id<Provider>;

/// Typed ID for ServiceArea entities.
pub type ServiceAreaId = Id<ServiceArea>;
