//! # CSV Fixtures
//!
//! Fixture data can be supplied as a directory of CSV files, one per table:
//!
//! ```text
//! fixtures/
//! ├── users.csv
//! ├── children.csv
//! ├── milestones.csv
//! ├── postcard_contents.csv
//! ├── postcards.csv
//! └── timeline.csv
//! ```
//!
//! Column names match the domain model field names. Empty cells are read as
//! absent optional values. The built-in seed data uses the same format and is
//! compiled into the binary.

pub mod loader;
pub mod seed;

#[cfg(test)]
pub mod test_utils;

pub use loader::{load_fixture_dir, read_table};
