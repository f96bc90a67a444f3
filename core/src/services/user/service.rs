//! User service implementation

use std::sync::Arc;
use uuid::Uuid;

use resto_shared::validation::{mask_email, normalize_email};

use crate::domain::entities::user::{NewUser, User, UserChanges, UserUpdate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::hasher::PasswordHasher;

const DUPLICATE_EMAIL: &str = "El email ya está registrado";

/// Service for staff accounts and login
pub struct UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Hashes passwords before they reach the repository
    password_hasher: Arc<H>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register an account
    ///
    /// The email is lowercased before the uniqueness check, and the
    /// password is hashed here, right before persistence.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user (the hash never leaves through serialization)
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn create(&self, input: NewUser) -> DomainResult<User> {
        let input = input.normalized();
        input.validate_user()?;

        if self
            .user_repository
            .find_by_email(&input.email)
            .await?
            .is_some()
        {
            tracing::warn!(
                email = %mask_email(&input.email),
                event = "duplicate_email",
                "Email already registered"
            );
            return Err(DomainError::conflict(DUPLICATE_EMAIL));
        }

        let password_hash = self.password_hasher.hash(&input.password).await?;
        let user = self
            .user_repository
            .create(User::create(&input, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.id,
            role = user.role.as_str(),
            event = "user_created",
            "User created"
        );

        Ok(user)
    }

    /// All accounts, newest first
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.user_repository.find_by_id(id).await
    }

    /// Apply a partial update
    ///
    /// A new password is validated and hashed before the write. Updates
    /// without a password leave the stored hash untouched. A new email must
    /// not belong to another account.
    pub async fn update(&self, id: Uuid, update: UserUpdate) -> DomainResult<Option<User>> {
        let update = update.normalized();
        update.validate_changes()?;

        if let Some(email) = &update.email {
            let holder = self.user_repository.find_by_email(email).await?;
            if holder.is_some_and(|other| other.id != id) {
                return Err(DomainError::conflict(DUPLICATE_EMAIL));
            }
        }

        let password_hash = match &update.password {
            Some(password) => Some(self.password_hasher.hash(password).await?),
            None => None,
        };

        let changes = UserChanges {
            email: update.email,
            password_hash,
            role: update.role,
            active: update.active,
        };

        if changes.is_empty() {
            return self.user_repository.find_by_id(id).await;
        }

        let password_changed = changes.password_hash.is_some();
        let updated = self.user_repository.update(id, changes).await?;
        if updated.is_some() {
            tracing::info!(
                user_id = %id,
                password_changed = password_changed,
                event = "user_updated",
                "User updated"
            );
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<Option<User>> {
        let deleted = self.user_repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(user_id = %id, event = "user_deleted", "User deleted");
        }
        Ok(deleted)
    }

    /// Check login credentials
    ///
    /// Unknown email, inactive account and wrong password all fail with
    /// the same `InvalidCredentials` error. An inactive account is rejected
    /// before the password is compared.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        let masked = mask_email(&email);

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            tracing::warn!(email = %masked, reason = "unknown_email", event = "login_failed", "Login failed");
            return Err(DomainError::InvalidCredentials);
        };

        if !user.active {
            tracing::warn!(email = %masked, reason = "inactive", event = "login_failed", "Login failed");
            return Err(DomainError::InvalidCredentials);
        }

        if !self
            .password_hasher
            .verify(password, &user.password_hash)
            .await?
        {
            tracing::warn!(email = %masked, reason = "wrong_password", event = "login_failed", "Login failed");
            return Err(DomainError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, event = "login_succeeded", "Login succeeded");
        Ok(user)
    }
}
