//! Stored document shapes and their conversion to domain entities.
//!
//! Ids are stored as UUID strings in `_id` and timestamps as BSON dates so
//! the server can sort on them.

use bson::{doc, Bson, DateTime as BsonDateTime, Document};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use resto_core::domain::entities::{
    Client, ClientUpdate, DeliveryAddress, Order, OrderChanges, OrderItem, User, UserChanges,
    UserRole,
};
use resto_core::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio")]
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDocument {
    #[serde(rename = "calle", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// `pedidos` collection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "cliente")]
    pub client_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "fecha")]
    pub date: BsonDateTime,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
    #[serde(rename = "domicilio", default)]
    pub is_delivery: bool,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<AddressDocument>,
    pub total: f64,
}

/// `clientes` collection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "fechaNacimiento", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<BsonDateTime>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(rename = "fechaRegistro")]
    pub registered_at: BsonDateTime,
    #[serde(rename = "estatus", default = "default_active")]
    pub active: bool,
}

/// `usuarios` collection document. `password` holds the bcrypt hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "rol")]
    pub role: UserRole,
    #[serde(rename = "estatus", default = "default_active")]
    pub active: bool,
    #[serde(rename = "fechaCreacion")]
    pub created_at: BsonDateTime,
}

fn default_active() -> bool {
    true
}

/// Filter selecting a document by id
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

fn parse_uuid(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Stored id {} is not a UUID: {}", raw, e),
    })
}

fn to_bson<T: Serialize>(value: &T) -> DomainResult<Bson> {
    bson::to_bson(value).map_err(|e| DomainError::Internal {
        message: format!("Failed to encode document: {}", e),
    })
}

/// Birth dates are stored as midnight UTC
fn date_to_bson(date: NaiveDate) -> BsonDateTime {
    BsonDateTime::from_chrono(date.and_time(NaiveTime::MIN).and_utc())
}

impl From<&OrderItem> for ItemDocument {
    fn from(item: &OrderItem) -> Self {
        Self {
            product: item.product.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

impl From<ItemDocument> for OrderItem {
    fn from(item: ItemDocument) -> Self {
        OrderItem::new(item.product, item.quantity, item.unit_price)
    }
}

impl From<&DeliveryAddress> for AddressDocument {
    fn from(address: &DeliveryAddress) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
        }
    }
}

impl From<AddressDocument> for DeliveryAddress {
    fn from(address: AddressDocument) -> Self {
        DeliveryAddress {
            street: address.street,
            city: address.city,
        }
    }
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            client_name: order.client_name.clone(),
            phone: order.phone.clone(),
            date: BsonDateTime::from_chrono(order.date),
            items: order.items.iter().map(ItemDocument::from).collect(),
            is_delivery: order.is_delivery,
            delivery_address: order.delivery_address.as_ref().map(AddressDocument::from),
            total: order.total,
        }
    }
}

impl TryFrom<OrderDocument> for Order {
    type Error = DomainError;

    fn try_from(document: OrderDocument) -> DomainResult<Self> {
        Ok(Order {
            id: parse_uuid(&document.id)?,
            client_name: document.client_name,
            phone: document.phone,
            date: document.date.to_chrono(),
            items: document.items.into_iter().map(OrderItem::from).collect(),
            is_delivery: document.is_delivery,
            delivery_address: document.delivery_address.map(DeliveryAddress::from),
            total: document.total,
        })
    }
}

impl From<&Client> for ClientDocument {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            document: client.document.clone(),
            full_name: client.full_name.clone(),
            birth_date: client.birth_date.map(date_to_bson),
            address: client.address.clone(),
            whatsapp: client.whatsapp.clone(),
            registered_at: BsonDateTime::from_chrono(client.registered_at),
            active: client.active,
        }
    }
}

impl TryFrom<ClientDocument> for Client {
    type Error = DomainError;

    fn try_from(document: ClientDocument) -> DomainResult<Self> {
        Ok(Client {
            id: parse_uuid(&document.id)?,
            document: document.document,
            full_name: document.full_name,
            birth_date: document.birth_date.map(|d| d.to_chrono().date_naive()),
            address: document.address,
            whatsapp: document.whatsapp,
            registered_at: document.registered_at.to_chrono(),
            active: document.active,
        })
    }
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            active: user.active,
            created_at: BsonDateTime::from_chrono(user.created_at),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = DomainError;

    fn try_from(document: UserDocument) -> DomainResult<Self> {
        Ok(User {
            id: parse_uuid(&document.id)?,
            email: document.email,
            password_hash: document.password_hash,
            role: document.role,
            active: document.active,
            created_at: document.created_at.to_chrono(),
        })
    }
}

/// `$set` body for an order update
pub fn order_set(changes: &OrderChanges) -> DomainResult<Document> {
    let mut set = Document::new();
    if let Some(client_name) = &changes.client_name {
        set.insert("cliente", client_name.as_str());
    }
    if let Some(phone) = &changes.phone {
        set.insert("telefono", phone.as_str());
    }
    if let Some(date) = changes.date {
        set.insert("fecha", BsonDateTime::from_chrono(date));
    }
    if let Some(items) = &changes.items {
        let items: Vec<ItemDocument> = items.iter().map(ItemDocument::from).collect();
        set.insert("items", to_bson(&items)?);
    }
    if let Some(is_delivery) = changes.is_delivery {
        set.insert("domicilio", is_delivery);
    }
    if let Some(address) = &changes.delivery_address {
        set.insert("direccion", to_bson(&AddressDocument::from(address))?);
    }
    if let Some(total) = changes.total {
        set.insert("total", total);
    }
    Ok(set)
}

/// `$set` body for a client update
pub fn client_set(changes: &ClientUpdate) -> Document {
    let mut set = Document::new();
    if let Some(document) = &changes.document {
        set.insert("documento", document.as_str());
    }
    if let Some(full_name) = &changes.full_name {
        set.insert("nombreCompleto", full_name.as_str());
    }
    if let Some(birth_date) = changes.birth_date {
        set.insert("fechaNacimiento", date_to_bson(birth_date));
    }
    if let Some(address) = &changes.address {
        set.insert("direccion", address.as_str());
    }
    if let Some(whatsapp) = &changes.whatsapp {
        set.insert("whatsapp", whatsapp.as_str());
    }
    if let Some(active) = changes.active {
        set.insert("estatus", active);
    }
    set
}

/// `$set` body for a user update. Only ever writes a hash.
pub fn user_set(changes: &UserChanges) -> Document {
    let mut set = Document::new();
    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    if let Some(password_hash) = &changes.password_hash {
        set.insert("password", password_hash.as_str());
    }
    if let Some(role) = changes.role {
        set.insert("rol", role.as_str());
    }
    if let Some(active) = changes.active {
        set.insert("estatus", active);
    }
    set
}
