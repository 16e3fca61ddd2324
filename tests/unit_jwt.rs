mod common;

use common::{TEST_SECRET, test_jwt_config};
use jsonwebtoken::{EncodingKey, Header, encode};
use pawcare::config::jwt::JwtConfig;
use pawcare::modules::users::model::UserRole;
use pawcare::utils::jwt::{create_session_token, verify_session_token};
use serde_json::json;
use uuid::Uuid;

fn now() -> usize {
    chrono::Utc::now().timestamp() as usize
}

/// Sign an arbitrary claims payload with the test secret, bypassing
/// `create_session_token`, to exercise expiry and schema edge cases.
fn raw_token(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_create_session_token_success() {
    let jwt_config = test_jwt_config();
    let result = create_session_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Owner,
        &jwt_config,
    );

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_round_trip_all_roles() {
    let jwt_config = test_jwt_config();

    for role in [UserRole::Owner, UserRole::Caretaker, UserRole::Admin] {
        let user_id = Uuid::new_v4();
        let email = format!("{}@example.com", role);

        let token = create_session_token(user_id, &email, role, &jwt_config).unwrap();
        let claims = verify_session_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, email);
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_expiry_is_seven_days() {
    let jwt_config = test_jwt_config();
    let token = create_session_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Caretaker,
        &jwt_config,
    )
    .unwrap();
    let claims = verify_session_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 604800);
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();
    let token = create_session_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Owner,
        &jwt_config,
    )
    .unwrap();

    let wrong_config = JwtConfig {
        secret: Some("different_secret_key".to_string()),
        session_expiry: 604800,
    };

    assert!(verify_session_token(&token, &wrong_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = vec![
        "",
        "invalid.token.here",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(
            verify_session_token(token, &jwt_config).is_err(),
            "token {:?} should be rejected",
            token
        );
    }
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = test_jwt_config();
    let token = raw_token(json!({
        "sub": Uuid::new_v4().to_string(),
        "email": "test@example.com",
        "role": "owner",
        "iat": now() - 604800,
        "exp": now() - 1,
    }));

    assert!(verify_session_token(&token, &jwt_config).is_err());
}

#[test]
fn test_verify_token_just_before_expiry() {
    let jwt_config = test_jwt_config();
    let token = raw_token(json!({
        "sub": Uuid::new_v4().to_string(),
        "email": "test@example.com",
        "role": "owner",
        "iat": now() - 604798,
        "exp": now() + 2,
    }));

    assert!(verify_session_token(&token, &jwt_config).is_ok());
}

#[test]
fn test_verify_token_unknown_role() {
    let jwt_config = test_jwt_config();
    let token = raw_token(json!({
        "sub": Uuid::new_v4().to_string(),
        "email": "test@example.com",
        "role": "zookeeper",
        "iat": now(),
        "exp": now() + 3600,
    }));

    assert!(verify_session_token(&token, &jwt_config).is_err());
}

#[test]
fn test_verify_token_missing_claim() {
    let jwt_config = test_jwt_config();
    // No email claim
    let token = raw_token(json!({
        "sub": Uuid::new_v4().to_string(),
        "role": "owner",
        "iat": now(),
        "exp": now() + 3600,
    }));

    assert!(verify_session_token(&token, &jwt_config).is_err());
}

#[test]
fn test_missing_secret_fails_closed() {
    let config = JwtConfig {
        secret: None,
        session_expiry: 604800,
    };

    assert!(
        create_session_token(Uuid::new_v4(), "test@example.com", UserRole::Owner, &config)
            .is_err()
    );

    // A token signed while a secret was configured is still rejected once
    // the secret is gone.
    let signed = create_session_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Owner,
        &test_jwt_config(),
    )
    .unwrap();
    assert!(verify_session_token(&signed, &config).is_err());
}

#[test]
fn test_different_users_different_tokens() {
    let jwt_config = test_jwt_config();
    let token1 = create_session_token(
        Uuid::new_v4(),
        "user1@example.com",
        UserRole::Owner,
        &jwt_config,
    )
    .unwrap();
    let token2 = create_session_token(
        Uuid::new_v4(),
        "user2@example.com",
        UserRole::Owner,
        &jwt_config,
    )
    .unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_session_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_session_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.email, "user1@example.com");
    assert_eq!(claims2.email, "user2@example.com");
}
