use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::{info, instrument};

use crate::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::modules::users::model::PublicUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    LoginQuery, LoginRequest, LoginResponse, MeResponse, MessageResponse, RegisterRequest,
    RegisterResponse,
};
use super::service::AuthService;

/// Register a new user. Owners are verified immediately; caretaker accounts
/// stay unverified until an admin reviews them.
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = AuthService::register_user(state.users.as_ref(), dto)?;

    info!(user_id = %user.id, role = %user.role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Log in and receive the session cookie.
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let (token, response) =
        AuthService::login_user(state.users.as_ref(), dto, query.redirect, &state.jwt_config)?;

    info!(user_id = %response.user.id, "login successful");

    let jar = jar.add(session_cookie(token, &state));
    Ok((jar, Json(response)))
}

/// Log out by deleting the session cookie. The token itself stays valid
/// until its natural expiry; there is no server-side revocation list.
pub async fn logout_user(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Browser-facing logout: clear the cookie and send the client to the
/// login page.
pub async fn logout_redirect(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::temporary("/login"))
}

/// Return the authenticated user's public record. Handlers re-verify the
/// session themselves even though the gate already ran for dashboard paths.
#[instrument(skip_all)]
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    let user = state
        .users
        .find_by_id(&user_id)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(MeResponse {
        user: PublicUser::from(&user),
    }))
}

/// Session cookie per the cookie contract: HTTP-only, `SameSite=Lax`,
/// path `/`, max-age matching the token lifetime, `Secure` in production.
fn session_cookie(token: String, state: &AppState) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(state.jwt_config.session_expiry))
        .secure(state.secure_cookies)
        .build()
}
