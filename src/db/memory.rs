//! In-process user collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::db::{UserCollection, UserFilter};
use crate::error::AppResult;
use crate::models::{NewUser, User, UserChanges};

/// [`UserCollection`] kept in memory, in insertion order.
///
/// Ids are generated with `ObjectId::new()`, so they look exactly like the
/// ones MongoDB hands out.
#[derive(Default)]
pub struct InMemoryUserCollection {
    documents: RwLock<Vec<User>>,
}

impl InMemoryUserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl UserCollection for InMemoryUserCollection {
    async fn find_one(&self, filter: UserFilter) -> AppResult<Option<User>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|user| filter.matches(user)).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.documents.read().await.clone())
    }

    async fn insert_one(&self, draft: &NewUser) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        self.documents
            .write()
            .await
            .push(User::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn update_one(&self, id: ObjectId, changes: &UserChanges) -> AppResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = changes.name.clone();
                user.email = changes.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: ObjectId) -> AppResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|user| user.id == id) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
