//! Client entity: a registered customer identified by a unique document number.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use resto_shared::validation::WHATSAPP_REGEX;

use super::dates;
use super::order::trim_option;
use crate::errors::{DomainResult, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Identity document number, unique across clients
    #[serde(rename = "documento")]
    pub document: String,

    #[serde(rename = "nombreCompleto")]
    pub full_name: String,

    #[serde(
        rename = "fechaNacimiento",
        default,
        deserialize_with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "whatsapp", default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    #[serde(rename = "fechaRegistro")]
    pub registered_at: DateTime<Utc>,

    #[serde(rename = "estatus")]
    pub active: bool,
}

impl Client {
    pub fn create(input: NewClient) -> Self {
        Self {
            id: Uuid::new_v4(),
            document: input.document,
            full_name: input.full_name,
            birth_date: input.birth_date,
            address: input.address,
            whatsapp: input.whatsapp,
            registered_at: Utc::now(),
            active: input.active.unwrap_or(true),
        }
    }

    /// Copy of this client with the given changes applied
    pub fn apply(&self, changes: &ClientUpdate) -> Self {
        let mut client = self.clone();
        if let Some(document) = &changes.document {
            client.document = document.clone();
        }
        if let Some(full_name) = &changes.full_name {
            client.full_name = full_name.clone();
        }
        if let Some(birth_date) = changes.birth_date {
            client.birth_date = Some(birth_date);
        }
        if let Some(address) = &changes.address {
            client.address = Some(address.clone());
        }
        if let Some(whatsapp) = &changes.whatsapp {
            client.whatsapp = Some(whatsapp.clone());
        }
        if let Some(active) = changes.active {
            client.active = active;
        }
        client
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewClient {
    #[serde(rename = "documento", default)]
    #[validate(length(min = 1, message = "El documento es requerido"))]
    pub document: String,

    #[serde(rename = "nombreCompleto", default)]
    #[validate(length(min = 1, message = "El nombre completo es requerido"))]
    pub full_name: String,

    #[serde(rename = "fechaNacimiento", default, deserialize_with = "dates::optional_date")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    #[serde(rename = "whatsapp", default)]
    #[validate(regex(path = *WHATSAPP_REGEX, message = "Por favor ingresa un número de WhatsApp válido con formato internacional"))]
    pub whatsapp: Option<String>,

    #[serde(rename = "estatus", default)]
    pub active: Option<bool>,
}

impl NewClient {
    pub fn normalized(self) -> Self {
        Self {
            document: self.document.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            address: trim_option(self.address),
            whatsapp: non_blank(self.whatsapp),
            ..self
        }
    }

    pub fn validate_client(&self) -> DomainResult<()> {
        self.validate()?;
        validate_birth_date(self.birth_date, Utc::now().date_naive())?;
        Ok(())
    }
}

/// Partial client update. Also the change set handed to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ClientUpdate {
    #[serde(rename = "documento", default)]
    #[validate(length(min = 1, message = "El documento es requerido"))]
    pub document: Option<String>,

    #[serde(rename = "nombreCompleto", default)]
    #[validate(length(min = 1, message = "El nombre completo es requerido"))]
    pub full_name: Option<String>,

    #[serde(rename = "fechaNacimiento", default, deserialize_with = "dates::optional_date")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    #[serde(rename = "whatsapp", default)]
    #[validate(regex(path = *WHATSAPP_REGEX, message = "Por favor ingresa un número de WhatsApp válido con formato internacional"))]
    pub whatsapp: Option<String>,

    #[serde(rename = "estatus", default)]
    pub active: Option<bool>,
}

impl ClientUpdate {
    pub fn normalized(self) -> Self {
        Self {
            document: trim_option(self.document),
            full_name: trim_option(self.full_name),
            address: trim_option(self.address),
            whatsapp: non_blank(self.whatsapp),
            ..self
        }
    }

    pub fn validate_changes(&self) -> DomainResult<()> {
        self.validate()?;
        validate_birth_date(self.birth_date, Utc::now().date_naive())?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &ClientUpdate::default()
    }
}

/// An empty WhatsApp number is the same as none
fn non_blank(value: Option<String>) -> Option<String> {
    trim_option(value).filter(|v| !v.is_empty())
}

/// A birth date may be today at the latest
pub fn validate_birth_date(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match birth_date {
        Some(date) if date > today => Err(ValidationError::BirthDateInFuture),
        _ => Ok(()),
    }
}
