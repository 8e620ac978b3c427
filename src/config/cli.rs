use crate::utils::error::{CheckoutError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fingard-checkout")]
#[command(about = "Quote and checkout tool for Fingard Partners services")]
pub struct CliArgs {
    #[arg(long, help = "Service id from the catalog (use \"custom\" with --amount)")]
    pub service: String,

    #[arg(long, help = "Amount for the custom service")]
    pub amount: Option<f64>,

    #[arg(long, help = "Coupon code to apply")]
    pub coupon: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Create a payment order via the configured gateway")]
    pub submit: bool,

    #[arg(long, help = "Client name (required with --submit)")]
    pub name: Option<String>,

    #[arg(long, help = "Client email (required with --submit)")]
    pub email: Option<String>,

    #[arg(long, help = "Client phone (required with --submit)")]
    pub phone: Option<String>,

    #[arg(long, default_value = "", help = "Free-form order description")]
    pub description: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service", &self.service)?;

        if self.submit {
            for (field, value) in [
                ("name", &self.name),
                ("email", &self.email),
                ("phone", &self.phone),
            ] {
                match value {
                    Some(value) => validate_non_empty_string(field, value)?,
                    None => {
                        return Err(CheckoutError::MissingConfig {
                            field: field.to_string(),
                        })
                    }
                }
            }
        }

        Ok(())
    }
}
