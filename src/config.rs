use std::collections::BTreeMap;

use checkout_schema::{BillingAddressInput, PaymentMethodCustomerDtoInput};
use checkout_validation::{ReasonError, ReasonTable, Rule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FieldConfig {
    pub identifier: String,

    #[serde(default)]
    pub rules: Vec<Rule>,

    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Reason texts keyed by localization key.
    #[serde(default)]
    pub reasons: BTreeMap<String, String>,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,

    #[serde(default)]
    pub customer: Option<PaymentMethodCustomerDtoInput>,

    #[serde(default)]
    pub billing_address: Option<BillingAddressInput>,
}

impl Config {
    pub fn create_reason_table(&self) -> Result<ReasonTable, ReasonError> {
        ReasonTable::new(&self.reasons)
    }
}
