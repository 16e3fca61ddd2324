use std::env;

use tracing::error;

/// Default session lifetime: 7 days, in seconds.
pub const DEFAULT_SESSION_EXPIRY: i64 = 604_800;

/// Session-token signing configuration.
///
/// The secret is deliberately optional and carries no development fallback:
/// when `JWT_SECRET` is unset, token issuance fails and every protected
/// route denies access. A missing secret is a deployment defect, not a
/// reason to serve unauthenticated traffic.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub session_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());

        if secret.is_none() {
            error!("JWT_SECRET is not set; token issuance and all dashboard routes will be refused");
        }

        Self {
            secret,
            session_expiry: env::var("SESSION_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_EXPIRY),
        }
    }
}
