//! # Storage Module
//!
//! Read-only data access for the dashboard. Domain services only see the
//! traits in [`traits`]; the data itself comes either from the built-in seed
//! fixtures or from a directory of CSV files.
//!
//! - **memory**: immutable, process-wide fixture tables with simulated latency
//! - **csv**: loader that turns a fixture directory into the same tables
//! - **latency**: per-operation delays standing in for network round trips
//!
//! There is no write path. Every record is created when the fixtures load and
//! never changes afterwards, so nothing here needs locking.

pub mod traits;
pub mod latency;
pub mod memory;
pub mod csv;

pub use traits::*;
pub use latency::{Operation, SimulatedLatency};
pub use memory::{FixtureSet, FixtureStore};
