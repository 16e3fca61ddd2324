use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    admin_dashboard, caretaker_dashboard, dashboard_home, owner_dashboard,
};

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_home))
        .route("/admin", get(admin_dashboard))
        .route("/zoo-manager", get(caretaker_dashboard))
        .route("/user", get(owner_dashboard))
}
