use std::sync::Arc;

use async_trait::async_trait;
use sitecrew_core::{AppError, AppResult, BearerToken};
use sitecrew_domain::UserProfile;
use tokio::sync::Mutex;

use crate::{AuthGateway, AuthGrant, CredentialStore, SignupRequest, StoredCredentials};

use super::SessionService;

struct FakeAuthGateway {
    grant: Option<AuthGrant>,
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn login(&self, _email: &str, _password: &str) -> AppResult<AuthGrant> {
        self.grant.clone().ok_or(AppError::Api {
            status: 401,
            message: "invalid credentials".to_owned(),
        })
    }

    async fn signup(&self, _request: &SignupRequest) -> AppResult<AuthGrant> {
        self.grant.clone().ok_or(AppError::Api {
            status: 400,
            message: "signup rejected".to_owned(),
        })
    }
}

#[derive(Default)]
struct FakeCredentialStore {
    credentials: Mutex<Option<StoredCredentials>>,
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn load(&self) -> AppResult<Option<StoredCredentials>> {
        Ok(self.credentials.lock().await.clone())
    }

    async fn save(&self, credentials: &StoredCredentials) -> AppResult<()> {
        *self.credentials.lock().await = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.credentials.lock().await = None;
        Ok(())
    }
}

fn worker_grant() -> AuthGrant {
    AuthGrant {
        access_token: BearerToken::new("access-1").unwrap_or_else(|_| panic!("test")),
        refresh_token: None,
        profile: UserProfile {
            id: Some(12),
            email: "crew@example.com".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            role: "worker".to_owned(),
            phone: None,
        },
    }
}

fn service(grant: Option<AuthGrant>, store: Arc<FakeCredentialStore>) -> SessionService {
    SessionService::new(Arc::new(FakeAuthGateway { grant }), store)
}

#[tokio::test]
async fn login_persists_credentials_and_builds_session() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store.clone());

    let session = service.login("crew@example.com", "pw").await;
    assert!(session.is_ok());

    let session = session.unwrap_or_else(|_| panic!("test"));
    assert_eq!(session.dashboard_route(), Some("WorkerDashboard"));
    assert_eq!(session.token().as_str(), "access-1");

    let persisted = store.credentials.lock().await;
    assert!(persisted.is_some());
}

#[tokio::test]
async fn login_with_empty_fields_is_rejected_before_the_network() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store.clone());

    assert!(service.login("", "pw").await.is_err());
    assert!(service.login("crew@example.com", "  ").await.is_err());
    assert!(store.credentials.lock().await.is_none());
}

#[tokio::test]
async fn failed_login_propagates_the_api_error_unchanged() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(None, store.clone());

    let result = service.login("crew@example.com", "wrong").await;
    let Err(error) = result else {
        panic!("expected login failure");
    };
    assert_eq!(error.status(), Some(401));
    assert!(store.credentials.lock().await.is_none());
}

#[tokio::test]
async fn restore_returns_none_without_persisted_credentials() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store);

    let restored = service.restore().await;
    assert!(matches!(restored, Ok(None)));
}

#[tokio::test]
async fn restore_rebuilds_the_session_after_login() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store);

    let logged_in = service.login("crew@example.com", "pw").await;
    assert!(logged_in.is_ok());

    let restored = service.restore().await;
    let Ok(Some(session)) = restored else {
        panic!("expected a restored session");
    };
    assert_eq!(session.profile().role, "worker");
    assert_eq!(session.token().as_str(), "access-1");
}

#[tokio::test]
async fn logout_clears_the_store_and_is_idempotent() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store.clone());

    let logged_in = service.login("crew@example.com", "pw").await;
    assert!(logged_in.is_ok());

    assert!(service.logout().await.is_ok());
    assert!(store.credentials.lock().await.is_none());
    assert!(service.logout().await.is_ok());
}

#[tokio::test]
async fn signup_requires_email_and_password() {
    let store = Arc::new(FakeCredentialStore::default());
    let service = service(Some(worker_grant()), store);

    let request = SignupRequest {
        email: String::new(),
        password: "pw".to_owned(),
        first_name: None,
        last_name: None,
        role: "worker".to_owned(),
    };
    assert!(service.signup(&request).await.is_err());
}
