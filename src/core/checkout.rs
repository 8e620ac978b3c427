use crate::core::catalog::Catalog;
use crate::core::coupons::CouponRegistry;
use crate::core::pricing;
use crate::core::summary::render_summary;
use crate::domain::model::{
    AmountField, CouponKind, CouponRule, CustomerPrefill, PaymentFields, PaymentNotes,
    PaymentReceipt, PaymentRequest, PaymentSummary, QuoteInput,
};
use crate::domain::ports::{ConfigProvider, PaymentGateway};
use crate::utils::error::{CheckoutError, Result};
use crate::utils::validation::{self, parse_amount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponOutcome {
    Applied(String),
    Invalid,
}

/// Snapshot of one payment attempt, fixed at begin time. Later edits to
/// the form or the coupon slot do not touch an attempt already in flight.
#[derive(Debug, Clone)]
pub struct PaymentAttempt {
    pub id: u64,
    pub request: PaymentRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Succeeded,
    Failed,
    /// The attempt was superseded or already settled; nothing changed.
    Stale,
}

/// Result of URL-parameter autofill.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefillOutcome {
    pub selection: Option<String>,
    /// Label for an option the page must add when the URL names a service
    /// outside the catalog. Its price stays caller-fixed.
    pub ad_hoc_option: Option<String>,
    pub amount_field: AmountField,
}

#[derive(Debug, Clone, Default)]
pub struct PrefillParams {
    pub service: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionState {
    Idle,
    Submitting { attempt: u64 },
}

/// Payment checkout flow: command handlers over a field snapshot, one
/// applied-coupon slot, and the submission state machine
/// (Idle -> Validating -> Rejected | Submitting -> Succeeded | Failed).
pub struct CheckoutFlow<G: PaymentGateway, C: ConfigProvider> {
    gateway: G,
    config: C,
    catalog: Catalog,
    coupons: CouponRegistry,
    applied_coupon: Option<CouponRule>,
    state: SubmissionState,
    attempts: u64,
}

impl<G: PaymentGateway, C: ConfigProvider> CheckoutFlow<G, C> {
    pub fn new(gateway: G, config: C) -> Self {
        let catalog = Catalog::new(
            config.services().iter().cloned(),
            config.custom_service_id(),
        );
        let coupons = CouponRegistry::new(config.coupons().iter().cloned());

        Self {
            gateway,
            config,
            catalog,
            coupons,
            applied_coupon: None,
            state: SubmissionState::Idle,
            attempts: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn applied_coupon(&self) -> Option<&CouponRule> {
        self.applied_coupon.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Service selection changed: new display state for the amount input.
    pub fn on_service_change(&self, selection: &str) -> AmountField {
        self.catalog.amount_for_selection(selection)
    }

    /// Live summary recomputation on every relevant input change.
    /// Unparseable or negative input renders as a zero quote; rejecting it
    /// is the submit-time validator's job.
    pub fn summary(&self, raw_amount: &str) -> PaymentSummary {
        let base_amount = parse_amount(raw_amount).unwrap_or(0.0);
        let quote = pricing::quote(&QuoteInput {
            base_amount,
            coupon: self.applied_coupon.clone(),
        });
        render_summary(&quote, self.applied_coupon.is_some())
    }

    /// Apply a coupon code. An unknown code clears any previously applied
    /// coupon and hides the discount row; it is not an error.
    pub fn apply_coupon(&mut self, raw_code: &str) -> CouponOutcome {
        match self.coupons.lookup(raw_code) {
            Some(rule) => {
                let rule = rule.clone();
                tracing::info!(code = %rule.code, "Coupon applied");
                self.applied_coupon = Some(rule.clone());
                CouponOutcome::Applied(rule.code)
            }
            None => {
                if self.applied_coupon.is_some() {
                    tracing::info!("Invalid coupon code, previous coupon cleared");
                }
                self.applied_coupon = None;
                CouponOutcome::Invalid
            }
        }
    }

    /// URL-parameter autofill: `service` is normalized (lowercase,
    /// whitespace runs become hyphens) and matched against the catalog; an
    /// unknown value becomes an ad-hoc, caller-fixed selection. `amount`
    /// fills the field for custom selections or when no fixed price
    /// applied.
    pub fn apply_prefill(&self, params: &PrefillParams) -> PrefillOutcome {
        let mut selection = None;
        let mut ad_hoc_option = None;
        let mut amount_field = AmountField {
            value: None,
            editable: false,
        };

        if let Some(raw_service) = &params.service {
            let normalized = normalize_service_param(raw_service);
            if self.catalog.get(&normalized).is_some() {
                amount_field = self.catalog.amount_for_selection(&normalized);
            } else {
                ad_hoc_option = Some(raw_service.clone());
            }
            selection = Some(normalized);
        }

        if let Some(raw_amount) = &params.amount {
            let is_custom = selection
                .as_deref()
                .map(|id| self.catalog.is_custom(id))
                .unwrap_or(false);
            if is_custom || amount_field.value.is_none() {
                amount_field.value = parse_amount(raw_amount);
            }
        }

        PrefillOutcome {
            selection,
            ad_hoc_option,
            amount_field,
        }
    }

    /// Validate the snapshot and open a payment attempt. Short-circuits on
    /// the first invalid field; a duplicate begin while another attempt is
    /// in flight fails without touching the gateway.
    pub fn begin_payment(&mut self, fields: &PaymentFields) -> Result<PaymentAttempt> {
        if self.is_in_flight() {
            return Err(CheckoutError::SubmissionInFlight);
        }

        validation::validate_payment(fields).map_err(CheckoutError::from)?;

        let original_amount = parse_amount(&fields.amount).unwrap_or(0.0);
        let quote = pricing::quote(&QuoteInput {
            base_amount: original_amount,
            coupon: self.applied_coupon.clone(),
        });

        let coupon_code = fields.coupon_code.trim();
        let service_type = if fields.service_type.is_empty() {
            "Services"
        } else {
            fields.service_type.as_str()
        };

        let request = PaymentRequest {
            amount_minor: pricing::to_minor_units(quote.final_amount),
            currency: self.config.currency().to_string(),
            business_name: self.config.business_name().to_string(),
            logo_url: self.config.logo_url().map(str::to_string),
            description: format!("Payment for {}", service_type),
            prefill: CustomerPrefill {
                name: fields.client_name.trim().to_string(),
                email: fields.client_email.trim().to_string(),
                contact: fields.client_phone.trim().to_string(),
            },
            notes: PaymentNotes {
                service_type: fields.service_type.clone(),
                description: fields.description.clone(),
                coupon_code: if coupon_code.is_empty() {
                    "N/A".to_string()
                } else {
                    coupon_code.to_string()
                },
                original_amount,
                discount_applied: match &self.applied_coupon {
                    Some(rule) => describe_discount(rule),
                    None => "N/A".to_string(),
                },
            },
            theme_color: self.config.theme_color().to_string(),
        };

        self.attempts += 1;
        let id = self.attempts;
        self.state = SubmissionState::Submitting { attempt: id };
        tracing::debug!(
            attempt = id,
            amount_minor = request.amount_minor,
            "Payment attempt started"
        );

        Ok(PaymentAttempt { id, request })
    }

    /// Settle a gateway result. Success clears the applied coupon (form
    /// reset is the caller's concern); failure keeps it so the user can
    /// retry. A result for a superseded attempt changes nothing.
    pub fn complete_payment(&mut self, attempt_id: u64, succeeded: bool) -> Settlement {
        match self.state {
            SubmissionState::Submitting { attempt } if attempt == attempt_id => {
                self.state = SubmissionState::Idle;
                if succeeded {
                    self.applied_coupon = None;
                    tracing::info!(attempt = attempt_id, "Payment succeeded, coupon cleared");
                    Settlement::Succeeded
                } else {
                    tracing::warn!(attempt = attempt_id, "Payment failed, coupon retained");
                    Settlement::Failed
                }
            }
            _ => {
                tracing::debug!(attempt = attempt_id, "Stale payment result ignored");
                Settlement::Stale
            }
        }
    }

    /// Release the in-flight flag without settling (checkout dismissed).
    /// A later result for the released attempt is then stale.
    pub fn abandon_payment(&mut self, attempt_id: u64) {
        if let SubmissionState::Submitting { attempt } = self.state {
            if attempt == attempt_id {
                tracing::debug!(attempt = attempt_id, "Payment attempt abandoned");
                self.state = SubmissionState::Idle;
            }
        }
    }

    /// Full attempt: validate, snapshot, one gateway call, settle. No
    /// automatic retry; a failure returns control to the caller, who may
    /// resubmit from current field values.
    pub async fn submit_payment(&mut self, fields: &PaymentFields) -> Result<PaymentReceipt> {
        let attempt = self.begin_payment(fields)?;
        let result = self.gateway.collect(&attempt.request).await;
        self.complete_payment(attempt.id, result.is_ok());
        result
    }
}

/// Descriptor for the gateway notes, e.g. "10%" or "₹500".
fn describe_discount(rule: &CouponRule) -> String {
    match rule.kind {
        CouponKind::Percent => format!("{}%", trim_number(rule.value)),
        CouponKind::Flat => format!("₹{}", trim_number(rule.value)),
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn normalize_service_param(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                normalized.push('-');
            }
            in_whitespace = true;
        } else {
            normalized.push(ch);
            in_whitespace = false;
        }
    }
    normalized
}
