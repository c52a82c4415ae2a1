use std::sync::Arc;

use chrono::Utc;
use sitecrew_core::{AppError, AppResult, NonEmptyString};

use crate::{AuthGateway, AuthGrant, CredentialStore, Session, SignupRequest, StoredCredentials};

#[cfg(test)]
mod tests;

/// Session lifecycle: login, signup, restore, logout.
///
/// The service builds a [`Session`] from gateway grants and keeps the
/// credential store in step. It never refreshes or validates tokens; a stale
/// token simply fails at the backend on the next request.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn CredentialStore>,
}

impl SessionService {
    /// Creates a session service over an auth gateway and a credential store.
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn CredentialStore>) -> Self {
        Self { gateway, store }
    }

    /// Authenticates against the backend and persists the resulting
    /// credentials.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let email = NonEmptyString::new(email)
            .map_err(|_| AppError::Validation("email is required".to_owned()))?;
        let password = NonEmptyString::new(password)
            .map_err(|_| AppError::Validation("password is required".to_owned()))?;

        let grant = self.gateway.login(email.as_str(), password.as_str()).await?;
        self.establish(grant).await
    }

    /// Registers a new account and persists the resulting credentials.
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<Session> {
        if request.email.trim().is_empty() || request.password.trim().is_empty() {
            return Err(AppError::Validation(
                "email and password are required".to_owned(),
            ));
        }

        let grant = self.gateway.signup(request).await?;
        self.establish(grant).await
    }

    /// Rebuilds a session from persisted credentials, if any exist.
    pub async fn restore(&self) -> AppResult<Option<Session>> {
        let Some(credentials) = self.store.load().await? else {
            return Ok(None);
        };

        Ok(Some(Session::new(
            credentials.access_token,
            credentials.refresh_token,
            credentials.profile,
            credentials.saved_at,
        )))
    }

    /// Clears persisted credentials. Idempotent.
    pub async fn logout(&self) -> AppResult<()> {
        self.store.clear().await
    }

    async fn establish(&self, grant: AuthGrant) -> AppResult<Session> {
        let saved_at = Utc::now();
        self.store
            .save(&StoredCredentials {
                access_token: grant.access_token.clone(),
                refresh_token: grant.refresh_token.clone(),
                profile: grant.profile.clone(),
                saved_at,
            })
            .await?;

        Ok(Session::new(
            grant.access_token,
            grant.refresh_token,
            grant.profile,
            saved_at,
        ))
    }
}
