use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Format used by `<input type="date">` values and the `min` attribute.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Services offered in the booking `<select>`. The placeholder option has an
/// empty value and fails the service rule.
pub const SERVICES: &[(&str, &str)] = &[
    ("plumbing", "Plumbing"),
    ("electrical", "Electrical"),
    ("carpentry", "Carpentry"),
    ("painting", "Painting"),
    ("hvac", "Heating & Cooling"),
    ("handyman", "General Handyman"),
    ("other", "Other Service"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Service,
        Field::Date,
    ];

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Service => "service",
            Field::Date => "date",
        }
    }

    /// Element id of the message shown under the input.
    pub fn error_id(self) -> String {
        format!("{}Error", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please select a service")]
    ServiceMissing,
    #[error("Please select a preferred date")]
    DateMissing,
    #[error("Please select a future date")]
    DateInPast,
}

/// Raw values of the booking form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
}

impl BookingRequest {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Service => self.service = value,
            Field::Date => self.date = value,
        }
    }

    /// Text inputs are trimmed; the select and the date picker are taken as-is.
    pub fn normalized(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            service: self.service.clone(),
            date: self.date.clone(),
        }
    }
}

/// Outcome of one submit attempt: every failing field with its message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

/// Runs all five field rules against `request`. No rule short-circuits
/// another, so the report lists every problem at once.
pub fn validate(request: &BookingRequest, today: NaiveDate) -> ValidationReport {
    let request = request.normalized();
    let mut errors = BTreeMap::new();

    let checks = [
        (Field::Name, check_name(&request.name)),
        (Field::Phone, check_phone(&request.phone)),
        (Field::Email, check_email(&request.email)),
        (Field::Service, check_service(&request.service)),
        (Field::Date, check_date(&request.date, today)),
    ];
    for (field, result) in checks {
        if let Err(err) = result {
            errors.insert(field, err);
        }
    }

    ValidationReport { errors }
}

/// Value for the date input's `min` attribute: the day after `today`.
pub fn earliest_bookable(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::NameMissing);
    }
    Ok(())
}

fn check_phone(phone: &str) -> Result<(), FieldError> {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    let pattern = PHONE.get_or_init(|| Regex::new(r"^[0-9\s\-()]+$").expect("phone pattern"));

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if phone.is_empty() || !pattern.is_match(phone) || digits < 10 {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), FieldError> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

    if email.is_empty() || !pattern.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

fn check_service(service: &str) -> Result<(), FieldError> {
    if service.is_empty() {
        return Err(FieldError::ServiceMissing);
    }
    Ok(())
}

fn check_date(date: &str, today: NaiveDate) -> Result<(), FieldError> {
    if date.is_empty() {
        return Err(FieldError::DateMissing);
    }
    // A value the picker could not have produced counts as no date chosen.
    let selected = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| FieldError::DateMissing)?;
    if selected < today {
        return Err(FieldError::DateInPast);
    }
    Ok(())
}
