//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate requests into service calls, map domain results to the DTOs of
//! the `shared` crate and domain errors to HTTP status codes.
//!
//! ## Design Patterns
//!
//! - **Handler Pattern**: One handler function per endpoint, grouped by resource
//! - **Dependency Injection**: Services reach handlers through Axum state
//! - **Mappers**: Domain models never go on the wire directly

pub mod rest;
