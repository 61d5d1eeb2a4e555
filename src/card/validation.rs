use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]*$").unwrap());

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 20;
pub const PHONE_LEN: usize = 10;

/// Form inputs, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    #[serde(rename = "phno")]
    Phone,
    Photo,
}

impl Field {
    /// HTML input name of the field.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phno",
            Field::Photo => "photo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    InvalidNameLength,
    InvalidNameCharacters,
    EmailRequired,
    InvalidEmail,
    PhoneRequired,
    InvalidPhone,
    PhotoRequired,
}

impl ValidationError {
    /// The field that should receive focus.
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameRequired
            | ValidationError::InvalidNameLength
            | ValidationError::InvalidNameCharacters => Field::Name,
            ValidationError::EmailRequired | ValidationError::InvalidEmail => Field::Email,
            ValidationError::PhoneRequired | ValidationError::InvalidPhone => Field::Phone,
            ValidationError::PhotoRequired => Field::Photo,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name required",
            ValidationError::InvalidNameLength => "invalid name length",
            ValidationError::InvalidNameCharacters => "invalid name",
            ValidationError::EmailRequired => "email required",
            ValidationError::InvalidEmail => "invalid email",
            ValidationError::PhoneRequired => "phone required",
            ValidationError::InvalidPhone => "invalid phone",
            ValidationError::PhotoRequired => "photo required",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Borrowed view of a submission for validation.
#[derive(Debug, Clone, Copy)]
pub struct FormFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phno: &'a str,
    pub has_photo: bool,
}

#[derive(Debug, Clone)]
pub struct Validator {
    email_domain: String,
}

impl Validator {
    pub fn new(email_domain: impl Into<String>) -> Self {
        Self {
            email_domain: email_domain.into(),
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Check the fields in form order and return the first failure.
    pub fn check(&self, fields: &FormFields<'_>) -> Result<(), ValidationError> {
        let name_len = fields.name.chars().count();
        if name_len == 0 {
            return Err(ValidationError::NameRequired);
        }
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
            return Err(ValidationError::InvalidNameLength);
        }
        // Unreachable through the filtered form input, but raw submissions can carry anything.
        if !NAME_RE.is_match(fields.name) {
            return Err(ValidationError::InvalidNameCharacters);
        }

        if fields.email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !fields.email.ends_with(&self.email_domain) {
            return Err(ValidationError::InvalidEmail);
        }

        if fields.phno.is_empty() {
            return Err(ValidationError::PhoneRequired);
        }
        if fields.phno.chars().count() != PHONE_LEN {
            return Err(ValidationError::InvalidPhone);
        }

        if !fields.has_photo {
            return Err(ValidationError::PhotoRequired);
        }

        Ok(())
    }
}

/// Keystroke filter for the name input: drops everything outside `[A-Za-z ]`.
pub fn filter_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}
