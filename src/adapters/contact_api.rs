use crate::config::ContactConfig;
use crate::domain::model::{ContactAck, ContactSubmission};
use crate::domain::ports::ContactGateway;
use crate::utils::error::{CheckoutError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Contact endpoint reply: `{"success": bool, "message": "..."}`.
#[derive(Debug, Deserialize)]
struct ContactReply {
    success: bool,
    message: Option<String>,
}

/// Form-encoded POST to the contact endpoint.
#[derive(Debug, Clone)]
pub struct ContactApi {
    client: Client,
    endpoint: String,
}

impl ContactApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(contact: &ContactConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = contact.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: contact.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ContactGateway for ContactApi {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck> {
        tracing::debug!("Submitting contact form to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(submission)
            .send()
            .await?;

        tracing::debug!("Contact endpoint status: {}", response.status());
        let reply: ContactReply = response.json().await?;

        if reply.success {
            Ok(ContactAck {
                message: reply
                    .message
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            })
        } else {
            Err(CheckoutError::ContactRejected {
                message: reply
                    .message
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            })
        }
    }
}
