use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header;
use sitecrew_application::{CredentialStore, StoredCredentials};
use sitecrew_core::{AppError, AppResult, BearerToken};
use sitecrew_domain::UserProfile;
use url::Url;

use super::{HttpApiClient, Resource};

#[derive(Default)]
struct FakeCredentialStore {
    credentials: Mutex<Option<StoredCredentials>>,
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn load(&self) -> AppResult<Option<StoredCredentials>> {
        Ok(self
            .credentials
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None))
    }

    async fn save(&self, credentials: &StoredCredentials) -> AppResult<()> {
        if let Ok(mut guard) = self.credentials.lock() {
            *guard = Some(credentials.clone());
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        if let Ok(mut guard) = self.credentials.lock() {
            *guard = None;
        }
        Ok(())
    }
}

fn stored_credentials(token: &str) -> StoredCredentials {
    StoredCredentials {
        access_token: BearerToken::new(token).unwrap_or_else(|_| panic!("test")),
        refresh_token: None,
        profile: UserProfile {
            id: Some(1),
            email: "crew@example.com".to_owned(),
            first_name: None,
            last_name: None,
            role: "worker".to_owned(),
            phone: None,
        },
        saved_at: Utc::now(),
    }
}

fn client_with_store(base: &str, store: Arc<FakeCredentialStore>) -> HttpApiClient {
    let base_url = Url::parse(base).unwrap_or_else(|_| panic!("test"));
    HttpApiClient::new(base_url, store).unwrap_or_else(|_| panic!("test"))
}

#[tokio::test]
async fn request_is_unauthenticated_without_a_stored_token() {
    let store = Arc::new(FakeCredentialStore::default());
    let client = client_with_store("http://api.example.com/api/", store);

    let request = client
        .request(reqwest::Method::GET, Resource::Users.collection_path())
        .await
        .and_then(|builder| {
            builder
                .build()
                .map_err(|error| AppError::Internal(error.to_string()))
        });

    let request = request.unwrap_or_else(|_| panic!("test"));
    assert!(request.headers().get(header::AUTHORIZATION).is_none());
    assert!(request.headers().get("X-Request-Id").is_some());
}

#[tokio::test]
async fn request_carries_bearer_header_when_a_token_is_stored() {
    let store = Arc::new(FakeCredentialStore::default());
    let saved = store.save(&stored_credentials("tok-123")).await;
    assert!(saved.is_ok());

    let client = client_with_store("http://api.example.com/api/", store);
    let request = client
        .request(reqwest::Method::GET, Resource::Invoices.collection_path())
        .await
        .and_then(|builder| {
            builder
                .build()
                .map_err(|error| AppError::Internal(error.to_string()))
        });

    let request = request.unwrap_or_else(|_| panic!("test"));
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    assert_eq!(authorization, Some("Bearer tok-123"));
}

#[tokio::test]
async fn base_url_without_trailing_slash_keeps_its_last_segment() {
    let store = Arc::new(FakeCredentialStore::default());
    let client = client_with_store("http://api.example.com/api", store);

    let request = client
        .request(reqwest::Method::GET, Resource::Vendors.collection_path())
        .await
        .and_then(|builder| {
            builder
                .build()
                .map_err(|error| AppError::Internal(error.to_string()))
        });

    let request = request.unwrap_or_else(|_| panic!("test"));
    assert_eq!(request.url().path(), "/api/vendors/");
}

#[tokio::test]
async fn unreachable_backend_surfaces_as_a_network_error() {
    let store = Arc::new(FakeCredentialStore::default());
    // Nothing listens on the discard port; the connect fails immediately.
    let client = client_with_store("http://127.0.0.1:9/api/", store);

    let result = client.list::<serde_json::Value>(Resource::Tasks).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}
