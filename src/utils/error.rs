use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown service: {id}")]
    UnknownService { id: String },

    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Payment declined: {description}")]
    PaymentDeclined { description: String },

    #[error("Contact submission rejected: {message}")]
    ContactRejected { message: String },

    #[error("A payment attempt is already in progress")]
    SubmissionInFlight,

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckoutError {
    /// Copy shown to end users; logs keep the full error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckoutError::Transport(_) => {
                "There was a problem connecting to the server. Please try again.".to_string()
            }
            CheckoutError::Validation { reason, .. } => reason.clone(),
            CheckoutError::PaymentDeclined { description } => {
                format!("Payment failed: {}", description)
            }
            CheckoutError::ContactRejected { message } => message.clone(),
            CheckoutError::SubmissionInFlight => {
                "A payment is already in progress. Please wait for it to finish.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;

/// A single form-field failure with user-facing copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl From<FieldError> for CheckoutError {
    fn from(error: FieldError) -> Self {
        CheckoutError::Validation {
            field: error.field,
            reason: error.reason,
        }
    }
}

/// Contact form failures keep every failing field so the page can render
/// them inline, one message per field.
#[derive(Error, Debug)]
pub enum ContactFormError {
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Submission(#[from] CheckoutError),
}
