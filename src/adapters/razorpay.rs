use crate::config::PaymentConfig;
use crate::domain::model::{PaymentReceipt, PaymentRequest};
use crate::domain::ports::PaymentGateway;
use crate::utils::error::{CheckoutError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_API_BASE: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Deserialize)]
struct OrderReply {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: Option<String>,
}

/// Hosted-checkout gateway backed by the Razorpay Orders API. Credentials
/// come from configuration, never from code.
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    client: Client,
    api_base: String,
    key_id: String,
    key_secret: Option<String>,
}

impl RazorpayGateway {
    pub fn new(key_id: impl Into<String>, key_secret: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            key_id: key_id.into(),
            key_secret,
        }
    }

    /// Point the adapter at a different API base; tests use a mock server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn from_config(payment: &PaymentConfig) -> Self {
        let gateway = Self::new(payment.key_id.clone(), payment.key_secret.clone());
        match &payment.api_base {
            Some(api_base) => gateway.with_api_base(api_base.clone()),
            None => gateway,
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn collect(&self, request: &PaymentRequest) -> Result<PaymentReceipt> {
        let url = format!("{}/orders", self.api_base);
        tracing::debug!(
            amount_minor = request.amount_minor,
            currency = %request.currency,
            "Creating payment order"
        );

        let body = json!({
            "amount": request.amount_minor,
            "currency": request.currency,
            "notes": {
                "service_type": request.notes.service_type,
                "description": request.notes.description,
                "coupon_code": request.notes.coupon_code,
                "original_amount": request.notes.original_amount,
                "discount_applied": request.notes.discount_applied,
            },
        });

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, self.key_secret.as_deref())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let order: OrderReply = response.json().await?;
            tracing::info!(order_id = %order.id, "Payment order created");
            Ok(PaymentReceipt {
                payment_id: order.id,
                created_at: Utc::now(),
            })
        } else {
            let description = response
                .json::<ErrorReply>()
                .await
                .ok()
                .and_then(|reply| reply.error)
                .and_then(|error| error.description)
                .unwrap_or_else(|| "Unknown error".to_string());

            tracing::warn!(status = %status, "Payment order declined: {}", description);
            Err(CheckoutError::PaymentDeclined { description })
        }
    }
}
