//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};

use crate::api::handlers;
use crate::api::middleware::logging_middleware;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/users` and `/users/{id}` - User CRUD operations
///
/// # Example
/// ```ignore
/// let database = Database::connect(&settings.database).await?;
/// let router = create_router(AppState::new(&database));
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::users::user_routes())
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::NewUser;
    use crate::repositories::UserRepository;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    const MISSING_ID: &str = "64b64c4f5311236168a109ca";

    /// Serves the real router on an ephemeral port over an in-memory store.
    struct TestApp {
        base_url: String,
        users: UserRepository,
        client: reqwest::Client,
    }

    impl TestApp {
        async fn spawn() -> Self {
            let database = Database::in_memory();
            let state = AppState::new(&database);
            let users = state.repositories.users.clone();

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, create_router(state)).await.unwrap();
            });

            Self {
                base_url: format!("http://{}", address),
                users,
                client: reqwest::Client::new(),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        async fn seed(&self, name: &str, email: &str) -> String {
            self.users
                .insert(NewUser {
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .await
                .unwrap()
                .id
                .to_hex()
        }
    }

    async fn assert_user_not_found(response: reqwest::Response) {
        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "User not found" }));
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let app = TestApp::spawn().await;

        let response = app.client.get(app.url("/users")).send().await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_users_in_insertion_order() {
        let app = TestApp::spawn().await;
        app.seed("John Doe", "john@doe.com").await;
        app.seed("Jane Doe", "jane@doe.com.br").await;

        let response = app.client.get(app.url("/users")).send().await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body[0]["name"], "John Doe");
        assert_eq!(body[0]["email"], "john@doe.com");
        assert_eq!(body[1]["name"], "Jane Doe");
        assert_eq!(body[1]["email"], "jane@doe.com.br");
    }

    #[tokio::test]
    async fn test_create_user() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .post(app.url("/users"))
            .json(&json!({ "name": "Alice", "email": "alice@email.com" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 201);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["email"], "alice@email.com");
        let id = body["_id"].as_str().unwrap();
        assert_eq!(id.len(), 24);

        let stored = app.users.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.to_hex(), id);
    }

    #[tokio::test]
    async fn test_create_user_rejects_non_json_body() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .post(app.url("/users"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert!(app.users.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_existing_user() {
        let app = TestApp::spawn().await;
        let id = app.seed("Bob", "bob@email.com").await;

        let response = app
            .client
            .get(app.url(&format!("/users/{}", id)))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "_id": id, "name": "Bob", "email": "bob@email.com" }));
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .get(app.url(&format!("/users/{}", MISSING_ID)))
            .send()
            .await
            .unwrap();

        assert_user_not_found(response).await;
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .get(app.url("/users/not-an-object-id"))
            .send()
            .await
            .unwrap();

        assert_user_not_found(response).await;
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let app = TestApp::spawn().await;
        let id = app.seed("Charlie", "charlie@email.com").await;

        let response = app
            .client
            .put(app.url(&format!("/users/{}", id)))
            .json(&json!({ "name": "Charles", "email": "charles@email.com" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "_id": id, "name": "Charles", "email": "charles@email.com" })
        );

        let reread: Value = app
            .client
            .get(app.url(&format!("/users/{}", id)))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(reread["name"], "Charles");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .put(app.url(&format!("/users/{}", MISSING_ID)))
            .json(&json!({ "name": "Nonexistent User", "email": "nonexistent@email.com" }))
            .send()
            .await
            .unwrap();

        assert_user_not_found(response).await;
    }

    #[tokio::test]
    async fn test_update_malformed_id_is_not_found() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .put(app.url("/users/12345"))
            .json(&json!({ "name": "Nobody", "email": "nobody@email.com" }))
            .send()
            .await
            .unwrap();

        assert_user_not_found(response).await;
    }

    #[tokio::test]
    async fn test_delete_existing_user() {
        let app = TestApp::spawn().await;
        let id = app.seed("Dave", "dave@email.com").await;

        let response = app
            .client
            .delete(app.url(&format!("/users/{}", id)))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "User deleted successfully" }));

        let again = app
            .client
            .delete(app.url(&format!("/users/{}", id)))
            .send()
            .await
            .unwrap();
        assert_user_not_found(again).await;
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let app = TestApp::spawn().await;

        let response = app
            .client
            .delete(app.url(&format!("/users/{}", MISSING_ID)))
            .send()
            .await
            .unwrap();

        assert_user_not_found(response).await;
    }
}
