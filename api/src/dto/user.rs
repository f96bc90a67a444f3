//! Login payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use resto_core::domain::entities::{User, UserRole};

/// Body of `POST /usuarios/login`
#[derive(Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// The only user fields a login exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub rol: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            rol: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub usuario: UserSummary,
}

impl LoginResponse {
    pub fn success(user: &User) -> Self {
        Self {
            message: "Login exitoso".to_string(),
            usuario: UserSummary::from(user),
        }
    }
}
