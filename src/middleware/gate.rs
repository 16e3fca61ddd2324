//! The dashboard gate.
//!
//! Layered over everything under `/dashboard`, ahead of every handler. Each
//! request is decided independently from its own cookie and the wall clock;
//! there is no shared mutable state between requests.
//!
//! A request is forwarded only when the session cookie is present, its token
//! verifies, and the decoded role matches the route policy for the path.
//! Anything else (no cookie, a malformed or expired or forged token, a
//! missing signing secret, a role mismatch) redirects to `/login` with the
//! requested path preserved, and removes the stale cookie so it is not
//! retried.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use tracing::debug;

use crate::middleware::auth::SESSION_COOKIE;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::jwt::verify_session_token;

/// Role required for each dashboard subtree. The prefixes are disjoint, so
/// at most one entry applies to any path.
const ROUTE_POLICY: &[(&str, UserRole)] = &[
    ("/dashboard/admin", UserRole::Admin),
    ("/dashboard/zoo-manager", UserRole::Caretaker),
    ("/dashboard/user", UserRole::Owner),
];

/// Look up the role the route policy requires for `path`. `None` means the
/// path has no role restriction beyond a valid session.
pub fn required_role(path: &str) -> Option<UserRole> {
    ROUTE_POLICY
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, role)| *role)
}

/// Middleware guarding the dashboard routes.
///
/// Apply with `middleware::from_fn_with_state`:
///
/// ```rust,ignore
/// Router::new()
///     .nest("/dashboard", init_dashboard_router()
///         .route_layer(middleware::from_fn_with_state(state.clone(), dashboard_gate)))
/// ```
pub async fn dashboard_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    let Some(token) = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string()) else {
        debug!(path = %path, "no session cookie");
        return deny(jar, &path);
    };

    let claims = match verify_session_token(&token, &state.jwt_config) {
        Ok(claims) => claims,
        Err(_) => {
            debug!(path = %path, "session rejected");
            return deny(jar, &path);
        }
    };

    if let Some(required) = required_role(&path) {
        if claims.role != required {
            debug!(path = %path, role = %claims.role, "role not permitted for path");
            return deny(jar, &path);
        }
    }

    next.run(req).await
}

/// Redirect to the login page, carrying the requested path so the client can
/// be sent back after a successful login, and drop the stale cookie.
fn deny(jar: CookieJar, path: &str) -> Response {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    let location = format!("/login?redirect={}", path);
    (jar, Redirect::temporary(&location)).into_response()
}
