use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if field.required() {
            Err(FieldError::Required(field.label()))
        } else {
            Ok(())
        };
    }
    if field == Field::Email && !is_valid_email(trimmed) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
        }
    }
}

pub type FormErrors = BTreeMap<Field, FieldError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: FormErrors,
    state: SubmitState,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Typing into a field clears its error until the next blur or submit.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn blur(&mut self, field: Field) -> bool {
        match validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(error) => {
                self.errors.insert(field, error);
                false
            }
        }
    }

    pub fn validate(&mut self) -> Result<(), FormErrors> {
        self.errors = Field::ALL
            .into_iter()
            .filter_map(|field| {
                validate_field(field, self.value(field))
                    .err()
                    .map(|error| (field, error))
            })
            .collect();

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Starts the simulated send. Ignored while a send is in flight.
    pub fn submit(&mut self) -> Result<bool, FormErrors> {
        if self.state == SubmitState::Sending {
            return Ok(false);
        }
        self.validate()?;
        self.state = SubmitState::Sending;
        Ok(true)
    }

    pub fn finish_sending(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.input(Field::Name, "Ada");
        form.input(Field::Email, "a@b.com");
        form.input(Field::Message, "Hello there");
        form
    }

    #[test]
    fn email_pattern_accepts_and_rejects() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  first.last@example.co.uk "));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn empty_required_field_blocks_submit_with_inline_error() {
        let mut form = filled();
        form.input(Field::Name, "   ");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required("Name")));
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(
            form.error(Field::Name).map(ToString::to_string).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn invalid_email_is_rejected_on_submit() {
        let mut form = filled();
        form.input(Field::Email, "foo@bar");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_form_enters_sending_and_ignores_double_submit() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(true));
        assert_eq!(form.state(), SubmitState::Sending);
        assert_eq!(form.state().button_label(), "Sending...");
        assert_eq!(form.submit(), Ok(false));

        form.finish_sending();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn subject_is_optional() {
        assert_eq!(validate_field(Field::Subject, ""), Ok(()));
        assert_eq!(
            validate_field(Field::Message, ""),
            Err(FieldError::Required("Message"))
        );
    }

    #[test]
    fn blur_sets_and_input_clears_error() {
        let mut form = ContactForm::default();
        form.input(Field::Email, "nope");
        assert!(!form.blur(Field::Email));
        assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));

        form.input(Field::Email, "nope@");
        assert_eq!(form.error(Field::Email), None);
    }
}
