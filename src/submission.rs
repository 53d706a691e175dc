use std::rc::Rc;

use anyhow::{Context, Result};
use checkout_schema::TokenInput;
use checkout_validation::{Field, Form, FormValidatable, Reasons, Rule, SharedField, Validatable};

use crate::config::Config;

pub const CARD_NUMBER: &str = "cardNumber";
pub const FULL_NAME: &str = "fullName";
pub const EXPIRY_DATE: &str = "expiryDate";
pub const CVV: &str = "cvv";

pub enum Mode {
    /// Trigger errors on every field.
    ShowingErrors,
    Silent,
    /// Trigger errors on a single field and judge only that field.
    Only(String),
}

#[derive(Debug)]
pub struct Outcome {
    pub valid: bool,
    /// Triggered messages as `(identifier, message)`.
    pub errors: Vec<(String, String)>,
}

/// The checkout form in front of the `tokeniseCard` mutation.
pub struct CheckoutForm {
    form: Form,
    fields: Vec<Rc<Field>>,
}

impl CheckoutForm {
    pub fn new(config: &Config, reasons: Rc<dyn Reasons>) -> Self {
        let mut form = Form::new(reasons);
        let mut fields = Vec::with_capacity(config.fields.len());
        for field_config in &config.fields {
            let field = Rc::new(
                Field::new(field_config.identifier.clone(), field_config.rules.clone())
                    .with_input(field_config.input.clone()),
            );
            form.push(Rc::clone(&field) as SharedField);
            fields.push(field);
        }
        Self { form, fields }
    }

    pub fn validate(&self, mode: &Mode) -> Outcome {
        let valid = match mode {
            Mode::ShowingErrors => self.form.are_forms_valid_showing_error(),
            Mode::Silent => self.form.are_forms_valid(),
            Mode::Only(identifier) => {
                let target = Field::new(identifier.clone(), Vec::new());
                self.form.is_form_valid(&target)
            }
        };

        let errors = self
            .fields
            .iter()
            .flat_map(|field| {
                let identifier = field.identifier();
                field
                    .take_errors()
                    .into_iter()
                    .map(|message| (identifier.to_string(), message))
                    .collect::<Vec<_>>()
            })
            .collect();

        Outcome { valid, errors }
    }

    pub fn failing_rules(&self) -> Vec<(String, Rule)> {
        self.form.failing_rules()
    }

    fn input_of(&self, identifier: &str) -> Result<String> {
        self.form
            .field(identifier)
            .map(|field| field.input().trim().to_string())
            .with_context(|| format!("Field '{}' is not part of the form.", identifier))
    }

    /// Builds the mutation argument from the form fields.
    pub fn token_input(&self, config: &Config) -> Result<TokenInput> {
        let card_number = self
            .input_of(CARD_NUMBER)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let (month, year) = parse_expiry(&self.input_of(EXPIRY_DATE)?)?;

        let mut input = TokenInput::new(card_number, month, year, self.input_of(CVV)?);
        match self.input_of(FULL_NAME) {
            Ok(name) => input = input.name(name),
            Err(_) => tracing::debug!("No full name field, sending the card without a name."),
        }
        if let Some(customer) = &config.customer {
            input = input.customer(customer.clone());
        }
        if let Some(billing_address) = &config.billing_address {
            input = input.billing_address(billing_address.clone());
        }
        Ok(input)
    }
}

/// Parses `MM/YY` or `MM/YYYY` into a month and a four digit year.
pub fn parse_expiry(expiry: &str) -> Result<(i32, i32)> {
    let (month, year) = expiry
        .split_once('/')
        .with_context(|| format!("Expiry date '{}' is not in MM/YY form.", expiry))?;
    let month_text = month.trim();
    if !is_digits(month_text) {
        anyhow::bail!("Invalid expiry month '{}'.", month_text);
    }
    let month = month_text
        .parse::<i32>()
        .with_context(|| format!("Invalid expiry month '{}'.", month_text))?;
    if !(1..=12).contains(&month) {
        anyhow::bail!("Expiry month {} is out of range.", month);
    }

    let year_text = year.trim();
    if !is_digits(year_text) {
        anyhow::bail!("Invalid expiry year '{}'.", year_text);
    }
    let year = year_text
        .parse::<i32>()
        .with_context(|| format!("Invalid expiry year '{}'.", year_text))?;
    let year = match year_text.len() {
        2 => 2000 + year,
        4 => year,
        _ => anyhow::bail!("Expiry year '{}' must have 2 or 4 digits.", year_text),
    };
    Ok((month, year))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
