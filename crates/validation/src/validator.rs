use crate::rules::{MAX_TOO_SHORT_LEN, MIN_CARD_NUMBER_LEN};
use crate::{Reasons, Rule, Validatable};

/// Evaluates the rules of a single item against its current input.
pub struct Validator<'a, T: ?Sized, R: ?Sized> {
    item: &'a T,
    reasons: &'a R,
}

impl<'a, T, R> Validator<'a, T, R>
where
    T: Validatable + ?Sized,
    R: Reasons + ?Sized,
{
    pub fn new(item: &'a T, reasons: &'a R) -> Self {
        Self { item, reasons }
    }

    pub fn validate(&self, rule: Rule, trigger_error: bool) -> bool {
        let len = self.item.input().chars().count();
        let is_valid = match rule {
            Rule::InvalidCardNumber | Rule::CardMinimum => len >= MIN_CARD_NUMBER_LEN,
            Rule::CardNumberRequired
            | Rule::FullNameRequired
            | Rule::CvvRequired
            | Rule::DateRequired => len > 0,
            // Never inspects the input. Valid exactly when triggering, so it
            // never emits.
            Rule::CardExpired => trigger_error,
            Rule::TextTooShort => len > MAX_TOO_SHORT_LEN,
        };

        tracing::trace!(
            identifier = %self.item.identifier(),
            rule = %rule,
            valid = is_valid,
            "Rule evaluated."
        );

        if trigger_error && !is_valid {
            let message = self.reasons.reason(rule);
            tracing::debug!(
                identifier = %self.item.identifier(),
                rule = %rule,
                message = %message,
                "Trigger error."
            );
            self.item.trigger_error(message);
        }
        is_valid
    }

    /// Every rule is evaluated even after the first failure, so that each
    /// failing rule gets to emit its reason.
    pub fn is_valid(&self, trigger_error: bool) -> bool {
        let mut is_valid = true;
        for rule in self.item.rules() {
            is_valid &= self.validate(*rule, trigger_error);
        }
        is_valid
    }

    /// Rules that currently fail, in declaration order. Nothing is emitted.
    pub fn failing_rules(&self) -> Vec<Rule> {
        self.item
            .rules()
            .iter()
            .copied()
            .filter(|rule| !self.validate(*rule, false))
            .collect()
    }
}
