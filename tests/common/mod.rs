#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use pawcare::config::cors::CorsConfig;
use pawcare::config::jwt::JwtConfig;
use pawcare::modules::users::model::{User, UserRole};
use pawcare::modules::users::store::InMemoryUserStore;
use pawcare::state::AppState;
use pawcare::utils::jwt::create_session_token;
use pawcare::utils::password::hash_password;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: Some(TEST_SECRET.to_string()),
        session_expiry: 604800,
    }
}

pub fn test_state() -> AppState {
    AppState {
        users: Arc::new(InMemoryUserStore::new()),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        secure_cookies: false,
    }
}

/// State whose signing secret is absent, for fail-closed tests.
pub fn test_state_without_secret() -> AppState {
    let mut state = test_state();
    state.jwt_config.secret = None;
    state
}

pub fn seed_user(state: &AppState, email: &str, password: &str, role: UserRole) -> User {
    let user = User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password: hash_password(password).unwrap(),
        role,
        phone: None,
        address: None,
        pincode: None,
        is_verified: true,
        created_at: Utc::now(),
        specialization: None,
        experience: None,
        service_charge: None,
        company_name: None,
    };
    state.users.insert(user.clone());
    user
}

/// `Cookie` header value bearing a fresh session token for the user.
pub fn session_cookie_for(state: &AppState, user: &User) -> String {
    let token = create_session_token(user.id, &user.email, user.role, &state.jwt_config).unwrap();
    format!("token={}", token)
}
