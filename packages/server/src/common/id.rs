//! Typed integer keys for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around the `SERIAL` primary
//! keys used by every table. It prevents accidentally mixing up ID types
//! (e.g., passing a `ServiceAreaId` where a `ProviderId` was expected).
//!
//! # Example
//!
//! ```rust
//! use service_areas_core::common::Id;
//!
//! // Define entity marker types
//! pub struct Provider;
//! pub struct ServiceArea;
//!
//! // Create type aliases
//! pub type ProviderId = Id<Provider>;
//! pub type ServiceAreaId = Id<ServiceArea>;
//!
//! let provider_id = ProviderId::from_raw(1);
//! assert_eq!(provider_id.into_inner(), 1);
//!
//! // This would be a compile error:
//! // let wrong: ServiceAreaId = provider_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// A typed wrapper around an `i32` primary key.
///
/// IDs with different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use service_areas_core::common::Id;
///
/// struct Provider;
/// struct ServiceArea;
///
/// let provider_id: Id<Provider> = Id::from_raw(1);
/// let area_id: Id<ServiceArea> = provider_id; // Compile error!
/// ```
#[repr(transparent)]
pub struct Id<T>(i32, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Creates an `Id` from a raw key.
    ///
    /// Keys are assigned by the database; this is used when loading rows or
    /// reading ids from request paths.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw, PhantomData)
    }

    /// Returns the inner key.
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Parses an `Id` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `i32`.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.trim().parse()?, PhantomData))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<i32> for Id<T> {
    #[inline]
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl<T> From<Id<T>> for i32 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_raw)
    }
}

// ============================================================================
// sqlx support (always enabled)
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <i32 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i32 as Type<Postgres>>::compatible(ty)
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i32 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <i32 as Decode<Postgres>>::decode(value).map(Self::from_raw)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct User;

    type UserId = Id<User>;

    #[test]
    fn test_parse_and_display_roundtrip() {
        let id = UserId::from_raw(42);
        let s = id.to_string();
        let parsed = UserId::parse(&s).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("1.5").is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let id = UserId::from_raw(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let parsed: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_hash_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<UserId, &str> = HashMap::new();
        let id = UserId::from_raw(3);
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn test_ordering_follows_raw_key() {
        assert!(UserId::from_raw(1) < UserId::from_raw(2));
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = UserId::from_raw(1);
        let debug = format!("{:?}", id);
        assert!(debug.contains("User"));
    }

    #[test]
    fn id_binds_as_a_plain_integer_column() {
        assert_eq!(
            <UserId as Type<Postgres>>::type_info(),
            <i32 as Type<Postgres>>::type_info()
        );
    }
}
