//! Document store access.
//!
//! Provides the `UserCollection` abstraction, its MongoDB and in-memory
//! backends, and the `Database` handle that owns the connection.

mod client;
mod collection;
mod memory;

pub use client::Database;
pub use collection::{MongoUserCollection, UserCollection, UserFilter};
pub use memory::InMemoryUserCollection;
