use crate::domain::model::{
    ContactAck, ContactSubmission, CouponRule, PaymentReceipt, PaymentRequest, Service,
};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck>;
}

/// Hosted payment collaborator. One `collect` call per user-initiated
/// attempt; each call resolves exactly once with a receipt or an error.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn collect(&self, request: &PaymentRequest) -> Result<PaymentReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn business_name(&self) -> &str;
    fn theme_color(&self) -> &str;
    fn logo_url(&self) -> Option<&str>;
    fn currency(&self) -> &str;
    fn custom_service_id(&self) -> &str;
    fn services(&self) -> &[Service];
    fn coupons(&self) -> &[CouponRule];
}
