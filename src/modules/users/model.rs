//! User data models.
//!
//! # Core Types
//!
//! - [`User`] - The marketplace user entity
//! - [`UserRole`] - The three system roles
//! - [`PublicUser`] - Response DTO without credential material
//!
//! # Roles
//!
//! | Role | Description |
//! |------|-------------|
//! | Owner | Pet owner; requests care services, verified on signup |
//! | Caretaker | Provides care services; must be verified by an admin |
//! | Admin | Reviews caretaker accounts and oversees the marketplace |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System role of a user. Serialized as `owner`, `caretaker`, or `admin`;
/// deserializing any other string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Caretaker,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Owner => "owner",
            UserRole::Caretaker => "caretaker",
            UserRole::Admin => "admin",
        }
    }

    /// Landing page a user of this role is sent to after login.
    pub fn default_dashboard(&self) -> &'static str {
        match self {
            UserRole::Owner => "/dashboard/user",
            UserRole::Caretaker => "/dashboard/zoo-manager",
            UserRole::Admin => "/dashboard/admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user in the marketplace.
///
/// The caretaker profile fields are only populated for caretaker accounts.
/// The password field holds the bcrypt hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    // Caretaker profile
    pub specialization: Option<String>,
    pub experience: Option<String>,
    pub service_charge: Option<f64>,
    pub company_name: Option<String>,
}

/// User representation returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_verified: bool,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_verified: user.is_verified,
        }
    }
}
