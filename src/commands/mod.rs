//! CLI command implementations.

pub mod env;
pub mod fetch;

pub use env::EnvCommand;
pub use fetch::FetchCommand;
