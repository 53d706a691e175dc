use once_cell::sync::Lazy;

use crate::{Field, ReasonTable, Rule, Validator};

pub static REASONS: Lazy<ReasonTable> = Lazy::new(|| {
    ReasonTable::new([
        ("ERROR_CARD_NUMBER_INVALID", "Card number is invalid"),
        ("ERROR_CARD_MIN_NUMBER", "Card number must have at least 13 digits"),
        ("ERROR_FULLNAME_REQUIRED", "Full name is required"),
        ("ERROR_CARD_EXPIRED", "Card has expired"),
        ("ERROR_CVC_REQUIRED", "CVV is required"),
        ("ERROR_EXPIRED_DATE_REQUIRED", "Expiry date is required"),
        ("ERROR_TEXT_TOO_SHORT", "Text is too short"),
    ])
    .unwrap()
});

pub fn field(identifier: &str, input: &str, rules: Vec<Rule>) -> Field {
    Field::new(identifier, rules).with_input(input)
}

pub fn expect_passes_rule_(rule: Rule, input: &str) {
    let field = field("field", input, vec![rule]);
    if !Validator::new(&field, &*REASONS).validate(rule, true) {
        panic!("Expected rule {} to pass for {:?}", rule, input);
    }
    if !field.errors().is_empty() {
        panic!("Expected no errors, but found {:?}", field.errors());
    }
}

macro_rules! expect_passes_rule {
    ($rule:expr, $input:expr $(,)?) => {
        crate::test_harness::expect_passes_rule_($rule, $input);
    };
}

pub fn expect_fails_rule_(rule: Rule, input: &str) {
    let field = field("field", input, vec![rule]);
    if Validator::new(&field, &*REASONS).validate(rule, false) {
        panic!("Expected rule {} to fail for {:?}", rule, input);
    }
    if !field.errors().is_empty() {
        panic!("Silent validation triggered {:?}", field.errors());
    }
    if Validator::new(&field, &*REASONS).validate(rule, true) {
        panic!("Expected rule {} to fail for {:?}", rule, input);
    }
    if field.errors() != vec![crate::Reasons::reason(&*REASONS, rule).to_string()] {
        panic!("Expected one error for rule {}, found {:?}", rule, field.errors());
    }
}

macro_rules! expect_fails_rule {
    ($rule:expr, $input:expr $(,)?) => {
        crate::test_harness::expect_fails_rule_($rule, $input);
    };
}
