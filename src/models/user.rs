use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Builds the stored record from a draft and the id the store assigned to it.
    pub fn from_draft(id: ObjectId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    /// The mutable part of this record.
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// NewUser draft for inserting new documents; the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields overwritten by an update (`$set`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
}
