use std::cell::RefCell;

use crate::{Reasons, Rule, Validator};

/// A form input that can be checked against its rules.
///
/// Implementors own the error display: [`Validatable::trigger_error`] is called
/// once per failing rule whenever validation runs with error triggering.
pub trait Validatable {
    fn rules(&self) -> &[Rule];

    fn input(&self) -> String;

    fn identifier(&self) -> &str;

    fn trigger_error(&self, message: &str);

    fn contains_valid_input(&self, reasons: &dyn Reasons) -> bool {
        Validator::new(self, reasons).is_valid(false)
    }

    fn contains_valid_input_with_error(&self, reasons: &dyn Reasons) -> bool {
        Validator::new(self, reasons).is_valid(true)
    }
}

/// A text field that keeps the messages triggered on it.
#[derive(Debug, Default)]
pub struct Field {
    identifier: String,
    rules: Vec<Rule>,
    input: RefCell<String>,
    errors: RefCell<Vec<String>>,
}

impl Field {
    pub fn new(identifier: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            identifier: identifier.into(),
            rules,
            ..Default::default()
        }
    }

    pub fn with_input(self, input: impl Into<String>) -> Self {
        self.set_input(input);
        self
    }

    pub fn set_input(&self, input: impl Into<String>) {
        *self.input.borrow_mut() = input.into();
    }

    /// Messages triggered since the last [`Field::take_errors`] or
    /// [`Field::clear_errors`].
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn take_errors(&self) -> Vec<String> {
        std::mem::take(&mut *self.errors.borrow_mut())
    }

    pub fn clear_errors(&self) {
        self.errors.borrow_mut().clear();
    }
}

impl Validatable for Field {
    fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn input(&self) -> String {
        self.input.borrow().clone()
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn trigger_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
