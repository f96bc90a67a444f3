//! Order entity: a customer purchase with line items and a derived total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::dates;
use crate::errors::{DomainError, DomainResult, ValidationError};

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    /// Product name
    #[serde(rename = "producto", default)]
    #[validate(length(min = 1, message = "El producto es requerido"))]
    pub product: String,

    /// Units ordered, at least one
    #[serde(rename = "cantidad")]
    #[validate(range(min = 1, message = "La cantidad debe ser al menos 1"))]
    pub quantity: u32,

    /// Price of one unit, never negative
    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn new(product: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity × unit price
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    fn trimmed(mut self) -> Self {
        self.product = self.product.trim().to_string();
        self
    }
}

/// Sum of `quantity × unit_price` over all items; zero for an empty order.
pub fn compute_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::subtotal).sum()
}

/// Delivery address, only meaningful when the order is a delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(rename = "calle", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl DeliveryAddress {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            city: Some(city.into()),
        }
    }

    fn trimmed(self) -> Self {
        Self {
            street: trim_option(self.street),
            city: trim_option(self.city),
        }
    }
}

/// Persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(rename = "cliente")]
    pub client_name: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,

    pub items: Vec<OrderItem>,

    #[serde(rename = "domicilio")]
    pub is_delivery: bool,

    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,

    /// Always derived from `items`
    pub total: f64,
}

impl Order {
    /// Build a new order from validated input, stamping id, date and total.
    /// Any total the caller may have sent is not part of `NewOrder` and is
    /// therefore discarded.
    pub fn create(input: NewOrder) -> Self {
        let total = compute_total(&input.items);
        Self {
            id: Uuid::new_v4(),
            client_name: input.client_name,
            phone: input.phone,
            date: input.date.unwrap_or_else(Utc::now),
            items: input.items,
            is_delivery: input.is_delivery,
            delivery_address: input.delivery_address,
            total,
        }
    }

    /// Copy of this order with the given changes applied
    pub fn apply(&self, changes: &OrderChanges) -> Self {
        let mut order = self.clone();
        if let Some(client_name) = &changes.client_name {
            order.client_name = client_name.clone();
        }
        if let Some(phone) = &changes.phone {
            order.phone = phone.clone();
        }
        if let Some(date) = changes.date {
            order.date = date;
        }
        if let Some(items) = &changes.items {
            order.items = items.clone();
        }
        if let Some(is_delivery) = changes.is_delivery {
            order.is_delivery = is_delivery;
        }
        if let Some(address) = &changes.delivery_address {
            order.delivery_address = Some(address.clone());
        }
        if let Some(total) = changes.total {
            order.total = total;
        }
        order
    }

    /// Cross-field rules that need the whole order
    pub fn check_delivery(&self) -> Result<(), ValidationError> {
        validate_delivery(self.is_delivery, self.delivery_address.as_ref())
    }
}

/// Order submission
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewOrder {
    #[serde(rename = "cliente", default)]
    #[validate(length(min = 1, message = "El cliente es requerido"))]
    pub client_name: String,

    #[serde(rename = "telefono", default)]
    #[validate(length(min = 1, message = "El teléfono es requerido"))]
    pub phone: String,

    #[serde(rename = "fecha", default, deserialize_with = "dates::optional_datetime")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(rename = "domicilio", default)]
    pub is_delivery: bool,

    #[serde(rename = "direccion", default)]
    pub delivery_address: Option<DeliveryAddress>,
}

impl NewOrder {
    pub fn normalized(self) -> Self {
        Self {
            client_name: self.client_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            items: self.items.into_iter().map(OrderItem::trimmed).collect(),
            delivery_address: self.delivery_address.map(DeliveryAddress::trimmed),
            ..self
        }
    }

    /// Field rules, item rules and the conditional delivery address
    pub fn validate_order(&self) -> DomainResult<()> {
        self.validate()?;
        validate_items(&self.items)?;
        validate_delivery(self.is_delivery, self.delivery_address.as_ref())?;
        Ok(())
    }
}

/// Partial order update as received from the caller
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(rename = "cliente", default)]
    #[validate(length(min = 1, message = "El cliente es requerido"))]
    pub client_name: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(min = 1, message = "El teléfono es requerido"))]
    pub phone: Option<String>,

    #[serde(rename = "fecha", default, deserialize_with = "dates::optional_datetime")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,

    #[serde(rename = "domicilio", default)]
    pub is_delivery: Option<bool>,

    #[serde(rename = "direccion", default)]
    pub delivery_address: Option<DeliveryAddress>,
}

impl OrderUpdate {
    pub fn normalized(self) -> Self {
        Self {
            client_name: trim_option(self.client_name),
            phone: trim_option(self.phone),
            items: self
                .items
                .map(|items| items.into_iter().map(OrderItem::trimmed).collect()),
            delivery_address: self.delivery_address.map(DeliveryAddress::trimmed),
            ..self
        }
    }

    /// Rules on the fields present in this update
    pub fn validate_changes(&self) -> DomainResult<()> {
        self.validate()?;
        if let Some(items) = &self.items {
            validate_items(items)?;
        }
        Ok(())
    }
}

/// Changes handed to the repository. `total` is only ever set together
/// with `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderChanges {
    pub client_name: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub items: Option<Vec<OrderItem>>,
    pub is_delivery: Option<bool>,
    pub delivery_address: Option<DeliveryAddress>,
    pub total: Option<f64>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self == &OrderChanges::default()
    }
}

impl From<OrderUpdate> for OrderChanges {
    fn from(update: OrderUpdate) -> Self {
        let total = update.items.as_deref().map(compute_total);
        Self {
            client_name: update.client_name,
            phone: update.phone,
            date: update.date,
            items: update.items,
            is_delivery: update.is_delivery,
            delivery_address: update.delivery_address,
            total,
        }
    }
}

fn validate_items(items: &[OrderItem]) -> DomainResult<()> {
    for (index, item) in items.iter().enumerate() {
        if let Err(errors) = item.validate() {
            return Err(ValidationError::InvalidItem {
                field: format!("items[{}]", index),
                message: DomainError::from(errors).to_string(),
            }
            .into());
        }
    }
    if !compute_total(items).is_finite() {
        return Err(ValidationError::TotalOutOfRange.into());
    }
    Ok(())
}

fn validate_delivery(
    is_delivery: bool,
    address: Option<&DeliveryAddress>,
) -> Result<(), ValidationError> {
    if !is_delivery {
        return Ok(());
    }

    let is_blank = |value: Option<&String>| value.map_or(true, |v| v.trim().is_empty());

    if is_blank(address.and_then(|a| a.street.as_ref())) {
        return Err(ValidationError::DeliveryAddressRequired {
            field: "calle".to_string(),
        });
    }
    if is_blank(address.and_then(|a| a.city.as_ref())) {
        return Err(ValidationError::DeliveryAddressRequired {
            field: "ciudad".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn trim_option(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
