use serde::Serialize;

use crate::modules::users::model::UserRole;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub area: String,
    pub email: String,
    pub role: UserRole,
}
