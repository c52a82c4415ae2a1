use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitecrew_core::{AppResult, BearerToken};
use sitecrew_domain::UserProfile;

/// Credentials granted by the backend after a successful login or signup.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthGrant {
    /// Access token attached to subsequent requests.
    pub access_token: BearerToken,
    /// Refresh token, when the backend issues one.
    pub refresh_token: Option<BearerToken>,
    /// Profile of the authenticated user.
    pub profile: UserProfile,
}

/// New-account request forwarded to the backend unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Login email address.
    pub email: String,
    /// Plaintext password; the backend owns hashing and policy.
    pub password: String,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Requested role identifier.
    pub role: String,
}

/// Credentials as persisted in local device storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Persisted access token.
    pub access_token: BearerToken,
    /// Persisted refresh token, when one was issued.
    #[serde(default)]
    pub refresh_token: Option<BearerToken>,
    /// Serialized user profile.
    pub profile: UserProfile,
    /// When the credentials were written.
    pub saved_at: DateTime<Utc>,
}

/// Remote authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges email and password for an auth grant.
    async fn login(&self, email: &str, password: &str) -> AppResult<AuthGrant>;

    /// Registers a new account and returns its auth grant.
    async fn signup(&self, request: &SignupRequest) -> AppResult<AuthGrant>;
}

/// Local persisted credential storage.
///
/// Written at login, read at startup, cleared at logout. The store performs
/// no validation; an expired token is the backend's problem to report.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads persisted credentials, if any exist.
    async fn load(&self) -> AppResult<Option<StoredCredentials>>;

    /// Persists credentials, replacing any previous value.
    async fn save(&self, credentials: &StoredCredentials) -> AppResult<()>;

    /// Deletes persisted credentials. Deleting nothing is not an error.
    async fn clear(&self) -> AppResult<()>;
}
