use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sitecrew_application::{AuthGateway, AuthGrant, SignupRequest};
use sitecrew_core::{AppError, AppResult, BearerToken};
use sitecrew_domain::UserProfile;

use super::HttpApiClient;

#[derive(Debug, Serialize)]
struct LoginRequestBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponseBody {
    #[serde(alias = "access", alias = "token")]
    access_token: String,
    #[serde(default, alias = "refresh")]
    refresh_token: Option<String>,
    user: UserProfile,
}

impl AuthResponseBody {
    fn into_grant(self) -> AppResult<AuthGrant> {
        let access_token = BearerToken::new(self.access_token)
            .map_err(|_| AppError::Decode("login response carried an empty token".to_owned()))?;
        let refresh_token = self
            .refresh_token
            .filter(|token| !token.trim().is_empty())
            .map(BearerToken::new)
            .transpose()?;

        Ok(AuthGrant {
            access_token,
            refresh_token,
            profile: self.user,
        })
    }
}

#[async_trait]
impl AuthGateway for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> AppResult<AuthGrant> {
        let builder = self
            .request(reqwest::Method::POST, "login/")
            .await?
            .json(&LoginRequestBody { email, password });
        let response: AuthResponseBody = self.execute(builder).await?;
        response.into_grant()
    }

    async fn signup(&self, request: &SignupRequest) -> AppResult<AuthGrant> {
        let builder = self
            .request(reqwest::Method::POST, "signup/")
            .await?
            .json(request);
        let response: AuthResponseBody = self.execute(builder).await?;
        response.into_grant()
    }
}

#[cfg(test)]
mod tests {
    use super::AuthResponseBody;

    #[test]
    fn auth_response_accepts_the_simplejwt_field_names() {
        let body = serde_json::json!({
            "access": "tok-a",
            "refresh": "tok-r",
            "user": {
                "id": 4,
                "email": "pm@example.com",
                "role": "project_manager"
            }
        });
        let parsed: Result<AuthResponseBody, _> = serde_json::from_value(body);
        assert!(parsed.is_ok());

        let grant = parsed
            .map_err(|_| ())
            .and_then(|response| response.into_grant().map_err(|_| ()));
        assert!(grant.is_ok());
        let grant = grant.unwrap_or_else(|()| panic!("test"));
        assert_eq!(grant.access_token.as_str(), "tok-a");
        assert!(grant.refresh_token.is_some());
        assert_eq!(grant.profile.role, "project_manager");
    }

    #[test]
    fn empty_access_token_is_a_decode_error() {
        let body = serde_json::json!({
            "access_token": "   ",
            "user": { "id": 1, "email": "x@example.com", "role": "worker" }
        });
        let parsed: Result<AuthResponseBody, _> = serde_json::from_value(body);
        assert!(parsed.is_ok());
        assert!(parsed.is_ok_and(|response| response.into_grant().is_err()));
    }
}
