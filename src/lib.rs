pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::CheckoutConfig;
pub use crate::core::{checkout::CheckoutFlow, contact::ContactForm};
pub use utils::error::{CheckoutError, Result};
