use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{PublicUser, User, UserRole};
use crate::modules::users::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all)]
    pub fn register_user(store: &dyn UserStore, dto: RegisterRequest) -> Result<User, AppError> {
        if store.find_by_email(&dto.email).is_some() {
            return Err(AppError::bad_request("User already exists"));
        }

        let role = dto.role.unwrap_or(UserRole::Owner);

        let user = User {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            password: hash_password(&dto.password)?,
            role,
            phone: dto.phone,
            address: dto.address,
            pincode: dto.pincode,
            // Owners are trusted immediately; caretakers and admins wait for review.
            is_verified: role == UserRole::Owner,
            created_at: Utc::now(),
            specialization: dto.specialization,
            experience: dto.experience,
            service_charge: dto.service_charge,
            company_name: dto.company_name,
        };

        store.insert(user.clone());

        Ok(user)
    }

    /// Checks the credentials against the user store and issues a session
    /// token. Unknown email and wrong password produce the same error.
    #[instrument(skip_all)]
    pub fn login_user(
        store: &dyn UserStore,
        dto: LoginRequest,
        redirect: Option<String>,
        jwt_config: &JwtConfig,
    ) -> Result<(String, LoginResponse), AppError> {
        let user = store
            .find_by_email(&dto.email)
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = create_session_token(user.id, &user.email, user.role, jwt_config)?;

        // Only same-site paths are honored as post-login destinations.
        let redirect_to = redirect
            .filter(|path| path.starts_with('/'))
            .unwrap_or_else(|| user.role.default_dashboard().to_string());

        Ok((
            token,
            LoginResponse {
                message: "Login successful".to_string(),
                user: PublicUser::from(&user),
                redirect_to,
            },
        ))
    }
}
