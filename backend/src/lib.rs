pub mod config;
pub mod backend;
