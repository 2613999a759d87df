//! Application state for Axum web framework.

use crate::db::Database;
use crate::repositories::Repositories;

/// Application state shared by every request handler.
///
/// Built once at startup from an already connected [`Database`]; there is no
/// lazily initialized connection. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
}

impl AppState {
    /// Creates a new AppState from a connected database.
    ///
    /// # Example
    /// ```ignore
    /// let database = Database::connect(&settings.database).await?;
    /// let state = AppState::new(&database);
    /// ```
    pub fn new(database: &Database) -> Self {
        Self {
            repositories: Repositories::new(database),
        }
    }
}
