//! Data Transfer Objects for API requests and responses.
//!
//! - `user` - User request/response DTOs
//! - `message` - `{ "message": ... }` bodies for errors and acknowledgements

mod message;
mod user;

pub use message::MessageResponse;
pub use user::{UserPayload, UserResponse};
