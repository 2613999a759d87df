//! Middleware components for request processing.

mod error_handler;
mod logging;

pub use logging::{RequestId, logging_middleware};
