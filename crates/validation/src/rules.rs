use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRuleError;

/// A single check that can be attached to a form field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    InvalidCardNumber,
    CardNumberRequired,
    #[serde(alias = "cardMinimmun")]
    CardMinimum,
    FullNameRequired,
    /// Does not inspect the input. Its result is the error trigger flag the
    /// rule was evaluated with.
    CardExpired,
    CvvRequired,
    DateRequired,
    TextTooShort,
}

/// Shortest card number accepted by [`Rule::InvalidCardNumber`] and
/// [`Rule::CardMinimum`].
pub const MIN_CARD_NUMBER_LEN: usize = 13;

/// Inputs of this many characters or fewer fail [`Rule::TextTooShort`].
pub const MAX_TOO_SHORT_LEN: usize = 2;

impl Rule {
    pub const ALL: [Rule; 8] = [
        Rule::InvalidCardNumber,
        Rule::CardNumberRequired,
        Rule::CardMinimum,
        Rule::FullNameRequired,
        Rule::CardExpired,
        Rule::CvvRequired,
        Rule::DateRequired,
        Rule::TextTooShort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::InvalidCardNumber => "invalidCardNumber",
            Rule::CardNumberRequired => "cardNumberRequired",
            Rule::CardMinimum => "cardMinimum",
            Rule::FullNameRequired => "fullNameRequired",
            Rule::CardExpired => "cardExpired",
            Rule::CvvRequired => "cvvRequired",
            Rule::DateRequired => "dateRequired",
            Rule::TextTooShort => "textTooShort",
        }
    }

    /// Localization key of the reason shown when this rule fails.
    ///
    /// Both card number rules share one message.
    pub fn reason_key(&self) -> &'static str {
        match self {
            Rule::InvalidCardNumber | Rule::CardNumberRequired => "ERROR_CARD_NUMBER_INVALID",
            Rule::CardMinimum => "ERROR_CARD_MIN_NUMBER",
            Rule::FullNameRequired => "ERROR_FULLNAME_REQUIRED",
            Rule::CardExpired => "ERROR_CARD_EXPIRED",
            Rule::CvvRequired => "ERROR_CVC_REQUIRED",
            Rule::DateRequired => "ERROR_EXPIRED_DATE_REQUIRED",
            Rule::TextTooShort => "ERROR_TEXT_TOO_SHORT",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "cardMinimmun" {
            return Ok(Rule::CardMinimum);
        }
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ParseRuleError { name: s.to_string() })
    }
}
