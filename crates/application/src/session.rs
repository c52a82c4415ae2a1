use chrono::{DateTime, Utc};
use sitecrew_core::BearerToken;
use sitecrew_domain::{
    accessible_modules, dashboard_route_for, display_info_for, module_accessible, AppModule,
    RoleDisplay, UserProfile,
};

/// Authenticated session context.
///
/// Constructed once at login and threaded explicitly to whatever needs role
/// or token information. Nothing re-reads persisted storage behind its back.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: BearerToken,
    refresh_token: Option<BearerToken>,
    profile: UserProfile,
    established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from freshly issued or restored credentials.
    #[must_use]
    pub fn new(
        token: BearerToken,
        refresh_token: Option<BearerToken>,
        profile: UserProfile,
        established_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            refresh_token,
            profile,
            established_at,
        }
    }

    /// Returns the bearer token for outgoing requests.
    #[must_use]
    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Returns the refresh token, when the backend issued one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&BearerToken> {
        self.refresh_token.as_ref()
    }

    /// Returns the profile of the signed-in user.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns when this session was established.
    #[must_use]
    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }

    /// Returns the first screen for this session's role, if the role is known.
    #[must_use]
    pub fn dashboard_route(&self) -> Option<&'static str> {
        dashboard_route_for(self.profile.role.as_str())
    }

    /// Returns the label and icon for this session's role.
    #[must_use]
    pub fn role_display(&self) -> RoleDisplay {
        display_info_for(self.profile.role.as_str())
    }

    /// Returns whether this session's role may open the module.
    #[must_use]
    pub fn can_open(&self, module: AppModule) -> bool {
        module_accessible(self.profile.role.as_str(), module)
    }

    /// Returns every module this session's role may open.
    #[must_use]
    pub fn accessible_modules(&self) -> Vec<AppModule> {
        accessible_modules(self.profile.role.as_str())
    }
}
