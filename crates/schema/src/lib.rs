#![forbid(unsafe_code)]

mod error;
mod input_object;
mod nullable;

pub mod input_objects;

pub use error::SchemaError;
pub use input_object::InputObject;
pub use input_objects::{BillingAddressInput, PaymentMethodCustomerDtoInput, TokenInput};
pub use nullable::GraphQLNullable;

/// The `DateTime` scalar, RFC 3339 on the wire.
pub type DateTime = chrono::DateTime<chrono::Utc>;
