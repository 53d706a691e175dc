use std::rc::Rc;

use crate::{Reasons, Rule, Validatable, Validator};

/// A field shared between a form and whatever displays it.
pub type SharedField = Rc<dyn Validatable>;

/// An ordered set of fields validated together.
pub trait FormValidatable {
    fn forms(&self) -> &[SharedField];

    fn reasons(&self) -> &dyn Reasons;

    /// Checks every field without triggering errors.
    fn are_forms_valid(&self) -> bool {
        self.forms()
            .iter()
            .all(|field| field.contains_valid_input(self.reasons()))
    }

    /// Triggers the errors of every field, then reports whether the whole
    /// form is valid.
    fn are_forms_valid_showing_error(&self) -> bool {
        for field in self.forms() {
            field.contains_valid_input_with_error(self.reasons());
        }
        self.are_forms_valid()
    }

    /// Triggers the errors of the field sharing `form`'s identifier and
    /// returns that field's validity. Other fields are ignored.
    fn is_form_valid(&self, form: &dyn Validatable) -> bool {
        match self
            .forms()
            .iter()
            .find(|field| field.identifier() == form.identifier())
        {
            Some(field) => {
                field.contains_valid_input_with_error(self.reasons());
                field.contains_valid_input(self.reasons())
            }
            None => {
                tracing::debug!(identifier = %form.identifier(), "Field not found in form.");
                false
            }
        }
    }
}

pub struct Form {
    fields: Vec<SharedField>,
    reasons: Rc<dyn Reasons>,
}

impl Form {
    pub fn new(reasons: Rc<dyn Reasons>) -> Self {
        Self {
            fields: Vec::new(),
            reasons,
        }
    }

    pub fn with_field(mut self, field: SharedField) -> Self {
        self.push(field);
        self
    }

    pub fn push(&mut self, field: SharedField) {
        self.fields.push(field);
    }

    pub fn field(&self, identifier: &str) -> Option<&SharedField> {
        self.fields
            .iter()
            .find(|field| field.identifier() == identifier)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Silently failing rules of every field, as `(identifier, rule)` pairs.
    pub fn failing_rules(&self) -> Vec<(String, Rule)> {
        self.fields
            .iter()
            .flat_map(|field| {
                Validator::new(&**field, &*self.reasons)
                    .failing_rules()
                    .into_iter()
                    .map(|rule| (field.identifier().to_string(), rule))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl FormValidatable for Form {
    fn forms(&self) -> &[SharedField] {
        &self.fields
    }

    fn reasons(&self) -> &dyn Reasons {
        &*self.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{field, REASONS};
    use crate::{Field, ReasonTable};

    fn form(fields: &[&Rc<Field>]) -> Form {
        let reasons: Rc<dyn Reasons> = Rc::new(ReasonTable::clone(&REASONS));
        fields.iter().fold(Form::new(reasons), |form, field| {
            form.with_field(Rc::clone(field) as SharedField)
        })
    }

    #[test]
    fn showing_error_triggers_once_for_the_invalid_field() {
        let name = Rc::new(field("fullName", "", vec![Rule::FullNameRequired]));
        let cvv = Rc::new(field("cvv", "123", vec![Rule::CvvRequired]));
        let form = form(&[&name, &cvv]);

        assert!(!form.are_forms_valid_showing_error());
        assert_eq!(
            name.errors(),
            vec![REASONS.reason(Rule::FullNameRequired).to_string()]
        );
        assert!(cvv.errors().is_empty());
    }

    #[test]
    fn silent_check_emits_nothing() {
        let name = Rc::new(field("fullName", "", vec![Rule::FullNameRequired]));
        let form = form(&[&name]);

        assert!(!form.are_forms_valid());
        assert!(name.errors().is_empty());

        name.set_input("Ama Mensah");
        assert!(form.are_forms_valid());
    }

    #[test]
    fn showing_error_visits_every_field() {
        let number = Rc::new(field(
            "cardNumber",
            "",
            vec![Rule::CardNumberRequired, Rule::InvalidCardNumber],
        ));
        let cvv = Rc::new(field("cvv", "", vec![Rule::CvvRequired]));
        let form = form(&[&number, &cvv]);

        assert!(!form.are_forms_valid_showing_error());
        assert_eq!(number.errors().len(), 2);
        assert_eq!(cvv.errors().len(), 1);
    }

    #[test]
    fn empty_form_is_valid() {
        let form = form(&[]);
        assert!(form.is_empty());
        assert!(form.are_forms_valid());
        assert!(form.are_forms_valid_showing_error());
    }

    #[test]
    fn is_form_valid_targets_one_field() {
        let name = Rc::new(field("fullName", "Ama", vec![Rule::TextTooShort]));
        let cvv = Rc::new(field("cvv", "", vec![Rule::CvvRequired]));
        let form = form(&[&name, &cvv]);

        // A different instance sharing the identifier selects the form's field.
        let target = Field::new("fullName", Vec::new());
        assert!(form.is_form_valid(&target));
        assert!(!form.is_form_valid(&*cvv));
        assert!(name.errors().is_empty());
        assert_eq!(cvv.errors().len(), 1);
    }

    #[test]
    fn is_form_valid_with_unknown_identifier() {
        let name = Rc::new(field("fullName", "", vec![Rule::FullNameRequired]));
        let form = form(&[&name]);

        let stranger = field("postalCode", "", vec![Rule::TextTooShort]);
        assert!(!form.is_form_valid(&stranger));
        assert!(name.errors().is_empty());
        assert!(stranger.errors().is_empty());
    }

    #[test]
    fn failing_rules_are_reported_per_field() {
        let number = Rc::new(field(
            "cardNumber",
            "4242",
            vec![Rule::CardNumberRequired, Rule::InvalidCardNumber],
        ));
        let name = Rc::new(field("fullName", "Ama", vec![Rule::TextTooShort]));
        let form = form(&[&number, &name]);

        assert_eq!(
            form.failing_rules(),
            vec![("cardNumber".to_string(), Rule::InvalidCardNumber)]
        );
        assert!(form.field("fullName").is_some());
        assert!(form.field("cvv").is_none());
        assert!(number.errors().is_empty());
    }
}
