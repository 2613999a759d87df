//! Command handlers for CLI operations
//!
//! Command execution logic lives here, separate from parsing and validation.

pub mod serve;

pub use serve::ServeCommandHandler;
