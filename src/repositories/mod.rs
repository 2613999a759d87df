//! Repository layer for data access operations.

mod user_repo;

pub use user_repo::UserRepository;

use crate::db::Database;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap; every repository holds only `Arc` handles.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
}

impl Repositories {
    /// Creates a new Repositories instance over a connected database.
    pub fn new(database: &Database) -> Self {
        Self {
            users: UserRepository::new(database.users()),
        }
    }
}
