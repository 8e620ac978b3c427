pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod coupons;
pub mod pricing;
pub mod summary;

pub use crate::domain::model::{Quote, QuoteInput};
pub use crate::domain::ports::{ConfigProvider, ContactGateway, PaymentGateway};
pub use crate::utils::error::Result;
