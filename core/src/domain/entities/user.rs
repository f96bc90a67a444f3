//! User entity representing a staff account of the restaurant system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use resto_shared::validation::{normalize_email, EMAIL_REGEX, MIN_PASSWORD_LENGTH};

use crate::errors::{DomainResult, ValidationError};

/// Role of a staff account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Order-taking advisor
    #[default]
    #[serde(rename = "asesor")]
    Advisor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Advisor => "asesor",
        }
    }
}

/// Persisted user. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Lowercased, unique
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[serde(rename = "rol")]
    pub role: UserRole,

    /// Inactive users cannot authenticate
    #[serde(rename = "estatus")]
    pub active: bool,

    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user from validated input and an already computed hash
    pub fn create(input: &NewUser, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            password_hash,
            role: input.role.unwrap_or_default(),
            active: input.active.unwrap_or(true),
            created_at: Utc::now(),
        }
    }

    /// Copy of this user with the given changes applied
    pub fn apply(&self, changes: &UserChanges) -> Self {
        let mut user = self.clone();
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(password_hash) = &changes.password_hash {
            user.password_hash = password_hash.clone();
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(active) = changes.active {
            user.active = active;
        }
        user
    }
}

/// Account registration
#[derive(Clone, Default, Deserialize, Validate)]
pub struct NewUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "El email es requerido"))]
    pub email: String,

    /// Plaintext; hashed by the service before persistence
    #[serde(default)]
    pub password: String,

    #[serde(rename = "rol", default)]
    pub role: Option<UserRole>,

    #[serde(rename = "estatus", default)]
    pub active: Option<bool>,
}

impl NewUser {
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }

    pub fn validate_user(&self) -> DomainResult<()> {
        self.validate()?;
        check_email(&self.email)?;
        check_password(&self.password)?;
        Ok(())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"***")
            .field("role", &self.role)
            .field("active", &self.active)
            .finish()
    }
}

/// Partial account update as received from the caller
#[derive(Clone, Default, Deserialize, Validate)]
pub struct UserUpdate {
    #[serde(default)]
    #[validate(length(min = 1, message = "El email es requerido"))]
    pub email: Option<String>,

    /// Plaintext; re-hashed by the service when present
    #[serde(default)]
    pub password: Option<String>,

    #[serde(rename = "rol", default)]
    pub role: Option<UserRole>,

    #[serde(rename = "estatus", default)]
    pub active: Option<bool>,
}

impl UserUpdate {
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.as_deref().map(normalize_email),
            ..self
        }
    }

    pub fn validate_changes(&self) -> DomainResult<()> {
        self.validate()?;
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(password) = &self.password {
            check_password(password)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("role", &self.role)
            .field("active", &self.active)
            .finish()
    }
}

/// Changes handed to the repository. Carries a hash, never a plaintext
/// password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self == &UserChanges::default()
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    }
}
