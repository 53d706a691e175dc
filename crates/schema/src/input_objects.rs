use serde::{Deserialize, Serialize};

use crate::{GraphQLNullable, InputObject};

/// `PaymentMethodCustomerDtoInput`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodCustomerDtoInput {
    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub id: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub email: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub name: GraphQLNullable<String>,
}

impl PaymentMethodCustomerDtoInput {
    pub fn new(
        id: GraphQLNullable<String>,
        email: GraphQLNullable<String>,
        name: GraphQLNullable<String>,
    ) -> Self {
        Self { id, email, name }
    }
}

impl InputObject for PaymentMethodCustomerDtoInput {
    const TYPE_NAME: &'static str = "PaymentMethodCustomerDtoInput";
}

/// `BillingAddressInput`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddressInput {
    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub line1: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub line2: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub city: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub postal_code: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub state: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub country: GraphQLNullable<String>,
}

impl InputObject for BillingAddressInput {
    const TYPE_NAME: &'static str = "BillingAddressInput";
}

/// `TokenInput`, the argument of the `tokeniseCard` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInput {
    pub card_number: String,

    pub expiry_month: i32,

    pub expiry_year: i32,

    pub cvv: String,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub name: GraphQLNullable<String>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub billing_address: GraphQLNullable<BillingAddressInput>,

    #[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]
    pub customer: GraphQLNullable<PaymentMethodCustomerDtoInput>,
}

impl TokenInput {
    pub fn new(
        card_number: impl Into<String>,
        expiry_month: i32,
        expiry_year: i32,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_month,
            expiry_year,
            cvv: cvv.into(),
            name: GraphQLNullable::Absent,
            billing_address: GraphQLNullable::Absent,
            customer: GraphQLNullable::Absent,
        }
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: GraphQLNullable::Value(name.into()),
            ..self
        }
    }

    pub fn billing_address(self, billing_address: BillingAddressInput) -> Self {
        Self {
            billing_address: billing_address.into(),
            ..self
        }
    }

    pub fn customer(self, customer: PaymentMethodCustomerDtoInput) -> Self {
        Self {
            customer: customer.into(),
            ..self
        }
    }
}

impl InputObject for TokenInput {
    const TYPE_NAME: &'static str = "TokenInput";
}
