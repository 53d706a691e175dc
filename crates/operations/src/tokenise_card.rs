//! The `tokeniseCard` mutation.

use checkout_schema::{DateTime, InputObject, TokenInput};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use value::{ConstValue, Name, Variables};

use crate::{GraphQLOperation, OperationError};

pub struct TokeniseCardMutation {
    pub data: TokenInput,
}

impl TokeniseCardMutation {
    pub fn new(data: TokenInput) -> Self {
        Self { data }
    }
}

impl GraphQLOperation for TokeniseCardMutation {
    const OPERATION_NAME: &'static str = "tokeniseCard";

    const DOCUMENT: &'static str = r#"mutation tokeniseCard($data: TokenInput!) {
  tokeniseCard(data: $data) {
    __typename
    id
    token
    createdDate
    customer {
      __typename
      id
      billingAddress {
        __typename
        line1
        line2
        city
        postalCode
        state
        country
      }
      description
      email
      name
      phone
      shippingAddress {
        __typename
        address {
          __typename
          line1
          line2
          city
          postalCode
          state
          country
        }
        name
        phone
      }
      systemCreated
      systemUpdated
      defaultPaymentMethod
    }
  }
}"#;

    type Data = TokeniseCardData;

    fn variables(&self) -> Result<Variables, OperationError> {
        let mut variables = IndexMap::new();
        variables.insert(Name::new("data"), self.data.to_value()?);
        Ok(Variables::from_value(ConstValue::Object(variables)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokeniseCardData {
    pub tokenise_card: TokeniseCard,
}

/// Parent type: `CardToken`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokeniseCard {
    pub id: String,
    pub token: String,
    pub created_date: DateTime,
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// Parent type: `Customer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: Option<String>,
    pub billing_address: Option<BillingAddress>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
    pub system_created: Option<DateTime>,
    pub system_updated: Option<DateTime>,
    pub default_payment_method: Option<String>,
}

/// Parent type: `BillingAddressApi`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Parent type: `ShippingAddressApi`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    pub address: Option<Address>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// The shipping address shares the `BillingAddressApi` type.
pub type Address = BillingAddress;
