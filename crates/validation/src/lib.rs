#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
mod test_harness;

mod error;
mod field;
mod form;
mod reasons;
mod rules;
mod validator;

pub use error::{ParseRuleError, ReasonError};
pub use field::{Field, Validatable};
pub use form::{Form, FormValidatable, SharedField};
pub use reasons::{ReasonTable, Reasons};
pub use rules::{Rule, MAX_TOO_SHORT_LEN, MIN_CARD_NUMBER_LEN};
pub use validator::Validator;
