//! Field-level validation errors raised by the entity validators
//!
//! Messages are user-facing and returned verbatim in the `error` field of
//! a 400 response.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidItem { field: String, message: String },

    #[error("Por favor ingresa un email válido")]
    InvalidEmail,

    #[error("La contraseña debe tener al menos {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("La fecha de nacimiento no puede ser futura")]
    BirthDateInFuture,

    #[error("El total del pedido excede el máximo permitido")]
    TotalOutOfRange,

    #[error("El campo direccion.{field} es requerido para pedidos a domicilio")]
    DeliveryAddressRequired { field: String },
}
