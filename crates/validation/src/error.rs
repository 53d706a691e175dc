use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReasonError {
    #[error("No reason text provided for localization key '{key}'.")]
    Missing { key: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown validation rule '{name}'.")]
pub struct ParseRuleError {
    pub name: String,
}
