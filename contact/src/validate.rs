//! Form draft and schema validation.
//!
//! The draft holds whatever the user typed. [`ContactDraft::validate`] is the
//! only way from a draft to a [`ContactRecord`]; it reports every failing
//! field at once so the form can mark all of them in a single pass.

use regex::Regex;
use std::sync::OnceLock;

use crate::record::{CompanySize, ContactRecord, Country};

/// The seven inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `first_name`
    FirstName,
    /// `last_name`
    LastName,
    /// `email`
    Email,
    /// `phone_number`
    PhoneNumber,
    /// `country`
    Country,
    /// `company_size`
    CompanySize,
    /// `info`
    Info,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Country,
        Field::CompanySize,
        Field::Info,
    ];

    /// Wire name, also used as the input `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::PhoneNumber => "phone_number",
            Field::Country => "country",
            Field::CompanySize => "company_size",
            Field::Info => "info",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::CompanySize => "Company Size",
            Field::Info => "Message",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Empty, or only whitespace.
    #[error("This field is required")]
    Required,
    /// Not a well-formed email address.
    #[error("Invalid email")]
    InvalidEmail,
    /// Enumeration value outside the option set.
    #[error("Invalid option selected")]
    NotAnOption,
}

/// Every failing field of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.errors))]
pub struct FieldErrors {
    errors: Vec<(Field, FieldError)>,
}

impl FieldErrors {
    fn push(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
    }

    /// Error for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    /// Iterate over `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().copied()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn summarize(errors: &[(Field, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{}: {}", field.name(), error))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw form values, exactly as typed or selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Given name as typed
    pub first_name: String,
    /// Family name as typed
    pub last_name: String,
    /// Email as typed
    pub email: String,
    /// Phone number as typed
    pub phone_number: String,
    /// Raw `<option value>`; parsed into [`Country`] on validation.
    pub country: String,
    /// Raw `<option value>`; parsed into [`CompanySize`] on validation.
    pub company_size: String,
    /// Message body
    pub info: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            country: Country::default().as_str().to_string(),
            company_size: CompanySize::default().as_str().to_string(),
            info: String::new(),
        }
    }
}

impl ContactDraft {
    /// Current raw value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::CompanySize => &self.company_size,
            Field::Info => &self.info,
        }
    }

    /// Replace the raw value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Country => &mut self.country,
            Field::CompanySize => &mut self.company_size,
            Field::Info => &mut self.info,
        };
        *slot = value.into();
    }

    /// Check the draft against the contact schema.
    ///
    /// Required text fields must be non-blank, `email` must be well formed,
    /// and the enumerations must hold one of their literal values. `info` is
    /// free-form and may be empty. Values are passed through untrimmed.
    pub fn validate(&self) -> Result<ContactRecord, FieldErrors> {
        let mut errors = FieldErrors::default();

        for field in [Field::FirstName, Field::LastName] {
            if is_blank(self.get(field)) {
                errors.push(field, FieldError::Required);
            }
        }

        if is_blank(&self.email) {
            errors.push(Field::Email, FieldError::Required);
        } else if !is_valid_email(&self.email) {
            errors.push(Field::Email, FieldError::InvalidEmail);
        }

        if is_blank(&self.phone_number) {
            errors.push(Field::PhoneNumber, FieldError::Required);
        }

        let country = self.country.parse::<Country>();
        if country.is_err() {
            errors.push(Field::Country, FieldError::NotAnOption);
        }
        let company_size = self.company_size.parse::<CompanySize>();
        if company_size.is_err() {
            errors.push(Field::CompanySize, FieldError::NotAnOption);
        }

        match (country, company_size) {
            (Ok(country), Ok(company_size)) if errors.is_empty() => Ok(ContactRecord {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                phone_number: self.phone_number.clone(),
                country,
                company_size,
                info: self.info.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn regex_email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email regex is valid")
    })
}

/// Syntactic email check.
///
/// The local part may not start with a dot or contain two dots in a row;
/// the regex crate has no lookahead, so those two rules are checked by hand.
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    regex_email().is_match(value)
}
