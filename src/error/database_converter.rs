use mongodb::error::{Error as MongoError, ErrorKind};

use crate::error::AppError;

/// Utility for converting MongoDB driver errors to structured AppError variants.
///
/// Connectivity failures (server selection, I/O, cleared pools) become
/// `AppError::Unavailable`; everything else is a plain `AppError::Database`.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a driver error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The MongoDB driver error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_mongo_error(error: MongoError, operation: &str) -> AppError {
        if Self::is_connectivity_error(&error) {
            AppError::Unavailable {
                operation: operation.to_string(),
                source: anyhow::Error::from(error),
            }
        } else {
            AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(error),
            }
        }
    }

    fn is_connectivity_error(error: &MongoError) -> bool {
        matches!(
            error.kind.as_ref(),
            ErrorKind::ServerSelection { .. }
                | ErrorKind::Io(_)
                | ErrorKind::ConnectionPoolCleared { .. }
        )
    }
}
