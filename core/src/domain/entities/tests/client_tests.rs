//! Unit tests for client entity

use chrono::NaiveDate;

use crate::domain::entities::client::{validate_birth_date, Client, ClientUpdate, NewClient};
use crate::errors::{DomainError, ValidationError};

fn ana() -> NewClient {
    NewClient {
        document: "123".to_string(),
        full_name: "Ana".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_defaults() {
    let client = Client::create(ana());
    assert!(client.active);
    assert!(client.birth_date.is_none());
    assert_eq!(client.document, "123");
}

#[test]
fn test_normalization_trims_fields() {
    let client = NewClient {
        document: "  123 ".to_string(),
        full_name: " Ana López ".to_string(),
        whatsapp: Some(" +573001234567 ".to_string()),
        ..Default::default()
    }
    .normalized();

    assert_eq!(client.document, "123");
    assert_eq!(client.full_name, "Ana López");
    assert_eq!(client.whatsapp.as_deref(), Some("+573001234567"));
    assert!(client.validate_client().is_ok());
}

#[test]
fn test_required_fields() {
    let err = NewClient::default().validate_client().unwrap_err();
    assert_eq!(
        err.to_string(),
        "El documento es requerido; El nombre completo es requerido"
    );
}

#[test]
fn test_whatsapp_format() {
    let client = NewClient {
        whatsapp: Some("3001234567".to_string()),
        ..ana()
    };
    let err = client.validate_client().unwrap_err();
    assert!(err.to_string().contains("WhatsApp"));
}

#[test]
fn test_birth_date_not_in_future() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let tomorrow = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

    assert!(validate_birth_date(Some(today), today).is_ok());
    assert!(validate_birth_date(None, today).is_ok());
    assert_eq!(
        validate_birth_date(Some(tomorrow), today),
        Err(ValidationError::BirthDateInFuture)
    );
}

#[test]
fn test_update_validation_only_checks_present_fields() {
    let update = ClientUpdate {
        address: Some("Calle 123 #45-67".to_string()),
        ..Default::default()
    };
    assert!(update.validate_changes().is_ok());

    let blank_name = ClientUpdate {
        full_name: Some("  ".to_string()),
        ..Default::default()
    }
    .normalized();
    assert!(matches!(
        blank_name.validate_changes(),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_client_deserializes_wire_names() {
    let input: NewClient = serde_json::from_value(serde_json::json!({
        "documento": "12345678",
        "nombreCompleto": "Juan Pérez",
        "fechaNacimiento": "1990-01-15",
        "direccion": "Calle 123 #45-67",
        "whatsapp": "+573001234567"
    }))
    .unwrap();

    assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1990, 1, 15));
    let json = serde_json::to_value(Client::create(input)).unwrap();
    assert_eq!(json["nombreCompleto"], "Juan Pérez");
    assert_eq!(json["fechaNacimiento"], "1990-01-15");
    assert_eq!(json["estatus"], true);
}

#[test]
fn test_blank_whatsapp_is_absent() {
    let client = NewClient {
        whatsapp: Some("  ".to_string()),
        ..ana()
    }
    .normalized();
    assert!(client.whatsapp.is_none());
    assert!(client.validate_client().is_ok());

    let update = ClientUpdate {
        whatsapp: Some(String::new()),
        ..Default::default()
    }
    .normalized();
    assert!(update.is_empty());
}

#[test]
fn test_birth_date_accepts_timestamp() {
    let input: NewClient = serde_json::from_value(serde_json::json!({
        "documento": "1",
        "nombreCompleto": "Ana",
        "fechaNacimiento": "1990-01-15T00:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1990, 1, 15));

    let update: ClientUpdate = serde_json::from_value(serde_json::json!({
        "fechaNacimiento": "1985-06-30"
    }))
    .unwrap();
    assert_eq!(update.birth_date, NaiveDate::from_ymd_opt(1985, 6, 30));
}
