pub mod fixtures;
pub mod store;

pub use fixtures::FixtureSet;
pub use store::FixtureStore;
