//! Dashboard endpoints.
//!
//! The gate has already run for these routes; each handler still extracts
//! [`AuthUser`] itself, so the identity check does not depend on router
//! wiring alone.

use axum::Json;

use crate::middleware::auth::AuthUser;

use super::model::DashboardResponse;

fn dashboard(area: &str, auth_user: &AuthUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        area: area.to_string(),
        email: auth_user.email().to_string(),
        role: auth_user.role(),
    })
}

pub async fn dashboard_home(auth_user: AuthUser) -> Json<DashboardResponse> {
    dashboard("home", &auth_user)
}

pub async fn admin_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    dashboard("admin", &auth_user)
}

pub async fn caretaker_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    dashboard("zoo-manager", &auth_user)
}

pub async fn owner_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    dashboard("user", &auth_user)
}
