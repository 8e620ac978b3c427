use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable catalog entry. `editable` is true only for the custom
/// service id, whose price comes from the amount field rather than the
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub base_price: f64,
    #[serde(default)]
    pub editable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    Percent,
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponRule {
    pub code: String,
    pub kind: CouponKind,
    pub value: f64,
}

/// Input to the pricing engine. `base_amount` below zero is treated as zero.
#[derive(Debug, Clone, Default)]
pub struct QuoteInput {
    pub base_amount: f64,
    pub coupon: Option<CouponRule>,
}

/// Derived projection of a `QuoteInput`; recomputed on every input change.
/// Invariant: `final_amount == max(0, base_amount - discount_amount)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub base_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
}

/// Raw contact form snapshot, exactly as read from the fields.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Raw payment form snapshot. `amount` stays a string until validation.
#[derive(Debug, Clone, Default)]
pub struct PaymentFields {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub amount: String,
    pub description: String,
    pub coupon_code: String,
}

/// Validated contact payload, form-encoded for the contact endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContactAck {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Free-form metadata passed through to the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotes {
    pub service_type: String,
    pub description: String,
    pub coupon_code: String,
    pub original_amount: f64,
    pub discount_applied: String,
}

/// Gateway payload, built from the submission-time snapshot. Amounts are in
/// minor units (paise); everything else keeps display precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount_minor: i64,
    pub currency: String,
    pub business_name: String,
    pub logo_url: Option<String>,
    pub description: String,
    pub prefill: CustomerPrefill,
    pub notes: PaymentNotes,
    pub theme_color: String,
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub created_at: DateTime<Utc>,
}

/// Display state for the amount input after a service selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountField {
    pub value: Option<f64>,
    pub editable: bool,
}

/// Rendered payment summary. The discount row is visible whenever a coupon
/// is applied, even if the computed discount is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub service_amount: String,
    pub discount_amount: String,
    pub total_amount: String,
    pub discount_visible: bool,
}
