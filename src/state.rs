use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::store::{InMemoryUserStore, UserStore};

/// Shared application state, assembled once at startup and injected into
/// every handler. The configs are read-only after this point.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// Mark session cookies `Secure`; set for production deployments.
    pub secure_cookies: bool,
}

pub fn init_app_state() -> AppState {
    AppState {
        users: Arc::new(InMemoryUserStore::new()),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        secure_cookies: std::env::var("ENVIRONMENT").is_ok_and(|env| env == "production"),
    }
}
