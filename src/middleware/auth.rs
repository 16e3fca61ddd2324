use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::SessionClaims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_session_token;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Extractor that validates the session cookie and provides the
/// authenticated user's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionClaims);

impl AuthUser {
    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.0.role == role
    }

    /// Get the user ID as a UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in session"))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthorized("Missing session cookie"))?;

        let claims = verify_session_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
