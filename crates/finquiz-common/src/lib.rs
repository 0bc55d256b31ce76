//! Error types shared across Finquiz crates.

pub mod errors;

pub use errors::ConfigError;
