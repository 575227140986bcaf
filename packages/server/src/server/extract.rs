//! Request extractors whose rejections become `ApiError::Validation`.
//!
//! axum's stock extractors answer malformed input with their own status codes
//! and plain-text bodies; these wrappers keep every failure in the
//! `{"detail": ...}` shape with a 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::ApiError;

/// JSON body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// URL query string
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

/// Path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
