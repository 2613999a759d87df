//! User repository over the document store.
//!
//! Each operation is a single collection call. Lookups, updates and deletes
//! that match nothing fail with `AppError::NotFound`.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::db::{UserCollection, UserFilter};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

const ENTITY: &str = "User";

/// User repository holding a shared collection handle.
///
/// Cloning only bumps the `Arc` count.
#[derive(Clone)]
pub struct UserRepository {
    collection: Arc<dyn UserCollection>,
}

impl UserRepository {
    /// Creates a new UserRepository over the given collection.
    pub fn new(collection: Arc<dyn UserCollection>) -> Self {
        Self { collection }
    }

    /// Lists every user in store order. No pagination.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.collection.find_all().await
    }

    /// Finds a user by id.
    ///
    /// # Errors
    /// `AppError::NotFound` when no user has this id.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<User> {
        self.collection
            .find_one(UserFilter::ById(id))
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, "_id", id))
    }

    /// Finds the first user whose email equals `email`.
    ///
    /// Email uniqueness is not enforced anywhere, so with duplicates this is
    /// whichever document the store returns first.
    ///
    /// # Errors
    /// `AppError::NotFound` when no user has this email.
    pub async fn find_one_by_email(&self, email: &str) -> AppResult<User> {
        self.collection
            .find_one(UserFilter::ByEmail(email.to_string()))
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, "email", email))
    }

    /// Inserts a new user and returns it with the id the store assigned.
    pub async fn insert(&self, draft: NewUser) -> AppResult<User> {
        let id = self.collection.insert_one(&draft).await?;
        tracing::debug!(user_id = %id, "User inserted");
        Ok(User::from_draft(id, draft))
    }

    /// Overwrites `name` and `email` of the user with `user.id`.
    ///
    /// Returns the input record unchanged; it is not re-read from the store.
    ///
    /// # Errors
    /// `AppError::NotFound` when no user has this id.
    pub async fn update(&self, user: User) -> AppResult<User> {
        let matched = self.collection.update_one(user.id, &user.changes()).await?;
        if matched == 0 {
            return Err(AppError::not_found(ENTITY, "_id", user.id));
        }
        tracing::debug!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Deletes the user with `id`.
    ///
    /// # Errors
    /// `AppError::NotFound` when no user has this id.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let deleted = self.collection.delete_one(id).await?;
        if deleted == 0 {
            return Err(AppError::not_found(ENTITY, "_id", id));
        }
        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }
}
