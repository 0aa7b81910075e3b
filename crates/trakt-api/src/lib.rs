//! Typed client library for the Trakt v1 API.
//!
//! Decodes heterogeneous Trakt JSON into strongly typed entities and
//! issues authenticated requests against the API.

/// Response decoding engine.
pub mod decode;

/// Domain entities.
pub mod entities;

/// Closed wire enumerations.
pub mod enumerations;

/// HTTP client, endpoints and request errors.
pub mod service;
