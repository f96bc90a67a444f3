//! Unit tests for user entity

use crate::domain::entities::user::{NewUser, User, UserChanges, UserRole, UserUpdate};
use crate::errors::{DomainError, ValidationError};

fn admin() -> NewUser {
    NewUser {
        email: "Admin@Restaurante.com".to_string(),
        password: "password123".to_string(),
        role: Some(UserRole::Admin),
        active: None,
    }
}

#[test]
fn test_email_is_normalized() {
    let input = admin().normalized();
    assert_eq!(input.email, "admin@restaurante.com");
    assert!(input.validate_user().is_ok());
}

#[test]
fn test_invalid_email_rejected() {
    let input = NewUser {
        email: "no-es-un-email".to_string(),
        ..admin()
    };
    assert!(matches!(
        input.validate_user(),
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[test]
fn test_short_password_rejected() {
    let input = NewUser {
        password: "12345".to_string(),
        ..admin()
    }
    .normalized();
    assert!(matches!(
        input.validate_user(),
        Err(DomainError::ValidationErr(ValidationError::PasswordTooShort { min: 6 }))
    ));
}

#[test]
fn test_create_defaults_role_and_status() {
    let input = NewUser {
        role: None,
        ..admin()
    }
    .normalized();
    let user = User::create(&input, "hash".to_string());

    assert_eq!(user.role, UserRole::Advisor);
    assert!(user.active);
    assert_eq!(user.password_hash, "hash");
}

#[test]
fn test_hash_never_serialized() {
    let user = User::create(&admin().normalized(), "$2b$12$secret".to_string());
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
    assert_eq!(json["rol"], "admin");
    assert_eq!(json["estatus"], true);
}

#[test]
fn test_role_wire_names() {
    assert_eq!(serde_json::to_string(&UserRole::Advisor).unwrap(), "\"asesor\"");
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    let role: UserRole = serde_json::from_str("\"asesor\"").unwrap();
    assert_eq!(role, UserRole::Advisor);
    assert!(serde_json::from_str::<UserRole>("\"chef\"").is_err());
}

#[test]
fn test_update_validation() {
    let update = UserUpdate {
        password: Some("123".to_string()),
        ..Default::default()
    };
    assert!(update.validate_changes().is_err());

    let update = UserUpdate {
        email: Some(" Nuevo@Mail.com ".to_string()),
        ..Default::default()
    }
    .normalized();
    assert_eq!(update.email.as_deref(), Some("nuevo@mail.com"));
    assert!(update.validate_changes().is_ok());
}

#[test]
fn test_debug_redacts_password() {
    let debug = format!("{:?}", admin());
    assert!(!debug.contains("password123"));
}

#[test]
fn test_apply_changes() {
    let user = User::create(&admin().normalized(), "old".to_string());
    let updated = user.apply(&UserChanges {
        password_hash: Some("new".to_string()),
        active: Some(false),
        ..Default::default()
    });

    assert_eq!(updated.password_hash, "new");
    assert!(!updated.active);
    assert_eq!(updated.email, user.email);
}
