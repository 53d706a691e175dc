use indexmap::IndexMap;

use crate::error::ReasonError;
use crate::Rule;

/// Source of the human readable text emitted when a rule fails.
pub trait Reasons {
    fn reason(&self, rule: Rule) -> &str;
}

/// Reason texts keyed by [`Rule::reason_key`].
///
/// A table always holds a text for every rule, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonTable {
    texts: IndexMap<&'static str, String>,
}

impl ReasonTable {
    pub fn new<I, K, V>(entries: I) -> Result<Self, ReasonError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut provided = entries
            .into_iter()
            .map(|(key, text)| (key.as_ref().to_string(), text.into()))
            .collect::<IndexMap<String, String>>();

        let mut texts = IndexMap::new();
        for rule in Rule::ALL {
            let key = rule.reason_key();
            if texts.contains_key(key) {
                continue;
            }
            let text = provided
                .shift_remove(key)
                .ok_or(ReasonError::Missing { key })?;
            texts.insert(key, text);
        }

        for key in provided.keys() {
            tracing::warn!(key = %key, "Ignoring unknown reason key.");
        }

        Ok(Self { texts })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl Reasons for ReasonTable {
    fn reason(&self, rule: Rule) -> &str {
        self.texts
            .get(rule.reason_key())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(&'static str, &'static str)> {
        vec![
            ("ERROR_CARD_NUMBER_INVALID", "Card number is invalid"),
            ("ERROR_CARD_MIN_NUMBER", "Card number is too short"),
            ("ERROR_FULLNAME_REQUIRED", "Full name is required"),
            ("ERROR_CARD_EXPIRED", "Card has expired"),
            ("ERROR_CVC_REQUIRED", "CVV is required"),
            ("ERROR_EXPIRED_DATE_REQUIRED", "Expiry date is required"),
            ("ERROR_TEXT_TOO_SHORT", "Text is too short"),
        ]
    }

    #[test]
    fn looks_up_by_rule() {
        let table = ReasonTable::new(entries()).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table.reason(Rule::CvvRequired), "CVV is required");
        assert_eq!(
            table.reason(Rule::CardNumberRequired),
            table.reason(Rule::InvalidCardNumber)
        );
    }

    #[test]
    fn missing_key_is_rejected() {
        let partial = entries()
            .into_iter()
            .filter(|(key, _)| *key != "ERROR_CVC_REQUIRED");
        assert_eq!(
            ReasonTable::new(partial),
            Err(ReasonError::Missing {
                key: "ERROR_CVC_REQUIRED"
            })
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut all = entries();
        all.push(("ERROR_SOMETHING_ELSE", "Unused"));
        let table = ReasonTable::new(all).unwrap();
        assert_eq!(table.len(), 7);
    }
}
