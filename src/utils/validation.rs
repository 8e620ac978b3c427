use crate::domain::model::{ContactFields, PaymentFields};
use crate::utils::error::{CheckoutError, FieldError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Patterns carried over from the production form, looseness included: the
// phone rule counts characters, not digits.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[+]?[\d\s\-\(\)]{10,}$";

pub fn is_valid_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN).unwrap().is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    Regex::new(PHONE_PATTERN).unwrap().is_match(value.trim())
}

/// Parse a raw amount field. `None` for non-numeric or non-finite input.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Contact form validation collects every failing field so the page can
/// show inline messages.
pub fn validate_contact(fields: &ContactFields) -> std::result::Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if fields.name.trim().chars().count() < 2 {
        errors.push(FieldError::new(
            "name",
            "Full Name must be at least 2 characters.",
        ));
    }
    if !is_valid_email(&fields.email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address.",
        ));
    }
    if !is_valid_phone(&fields.phone) {
        errors.push(FieldError::new(
            "phone",
            "Please enter a valid phone number (at least 10 digits).",
        ));
    }
    if fields.message.trim().chars().count() < 10 {
        errors.push(FieldError::new(
            "message",
            "Message must be at least 10 characters.",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Payment form validation short-circuits on the first failure; the page
/// surfaces it as a single blocking message and aborts submission.
pub fn validate_payment(fields: &PaymentFields) -> std::result::Result<(), FieldError> {
    if fields.client_name.trim().chars().count() < 2 {
        return Err(FieldError::new(
            "client-name",
            "Client Name must be at least 2 characters.",
        ));
    }
    if !is_valid_email(&fields.client_email) {
        return Err(FieldError::new(
            "client-email",
            "Please enter a valid email address.",
        ));
    }
    if !is_valid_phone(&fields.client_phone) {
        return Err(FieldError::new(
            "client-phone",
            "Please enter a valid phone number (at least 10 digits).",
        ));
    }
    if fields.service_type.is_empty() {
        return Err(FieldError::new(
            "service-type",
            "Please select a service type.",
        ));
    }
    match parse_amount(&fields.amount) {
        Some(amount) if amount > 0.0 => {}
        _ => {
            return Err(FieldError::new(
                "amount",
                "Amount must be a positive number.",
            ))
        }
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CheckoutError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CheckoutError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CheckoutError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CheckoutError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CheckoutError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
