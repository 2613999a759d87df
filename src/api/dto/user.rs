//! User-related DTOs for API requests and responses.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{NewUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Only `name` and `email` are read; any other field is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    /// Converts the payload into a draft for insertion.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
        }
    }

    /// Converts the payload into the full record for an update of `id`.
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data. `_id` is the 24-char hex ObjectId.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_uses_hex_id() {
        let id = ObjectId::parse_str("64b64c4f5311236168a109ca").unwrap();
        let response = UserResponse::from(User {
            id,
            name: "Bob".to_string(),
            email: "bob@email.com".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "64b64c4f5311236168a109ca",
                "name": "Bob",
                "email": "bob@email.com"
            })
        );
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        let payload: UserPayload = serde_json::from_value(serde_json::json!({
            "name": "Alice",
            "email": "alice@email.com",
            "_id": "64b64c4f5311236168a109ca",
            "admin": true
        }))
        .unwrap();

        let id = ObjectId::new();
        let user = payload.into_user(id);
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@email.com");
    }
}
