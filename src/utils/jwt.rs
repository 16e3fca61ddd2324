use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::SessionClaims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// The one message callers see for any rejected token. The actual cause
/// (malformed, forged, expired, missing secret) is only logged.
const INVALID_SESSION: &str = "Invalid or expired session";

/// Signs a session token for the given user, valid for the configured
/// session lifetime from now.
pub fn create_session_token(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let Some(secret) = jwt_config.secret.as_deref() else {
        error!("JWT_SECRET is not configured; refusing to issue a session token");
        return Err(AppError::internal_error("Session signing is not configured"));
    };

    let now = Utc::now().timestamp() as usize;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        iat: now,
        exp: now + jwt_config.session_expiry as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies a presented session token and decodes its claims.
///
/// Every failure collapses to the same opaque unauthorized error so the
/// caller cannot distinguish a forged token from an expired one. Decoding is
/// strict: a payload missing any claim field, or carrying a role outside the
/// known set, is rejected.
pub fn verify_session_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<SessionClaims, AppError> {
    let Some(secret) = jwt_config.secret.as_deref() else {
        error!("JWT_SECRET is not configured; rejecting session token");
        return Err(AppError::unauthorized(INVALID_SESSION));
    };

    // No leeway: a token is invalid the second it expires.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "session token rejected");
        AppError::unauthorized(INVALID_SESSION)
    })
}
