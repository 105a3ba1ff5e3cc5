//! Domain models. These carry real date types; the REST mappers turn them
//! into the string-based DTOs of the `shared` crate.

pub mod user;
pub mod child;
pub mod milestone;
pub mod postcard;
pub mod timeline;
pub mod dashboard;
