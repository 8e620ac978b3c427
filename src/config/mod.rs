#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::{CouponKind, CouponRule, Service};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckoutError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CUSTOM_SERVICE_ID: &str = "custom";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    pub business: BusinessConfig,
    pub contact: ContactConfig,
    pub payment: PaymentConfig,
    #[serde(default = "default_services")]
    pub services: Vec<Service>,
    #[serde(default = "default_coupons")]
    pub coupons: Vec<CouponRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub name: String,
    pub theme_color: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub currency: String,
    pub key_id: String,
    pub key_secret: Option<String>,
    /// Override for the gateway API base; tests point this at a mock
    /// server.
    pub api_base: Option<String>,
    pub custom_service_id: Option<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            business: BusinessConfig {
                name: "Fingard Partners".to_string(),
                theme_color: "#002147".to_string(),
                logo_url: None,
            },
            contact: ContactConfig {
                endpoint: "https://fingardpartners.com/api/contact".to_string(),
                timeout_seconds: None,
            },
            payment: PaymentConfig {
                currency: "INR".to_string(),
                key_id: "rzp_test_placeholder".to_string(),
                key_secret: None,
                api_base: None,
                custom_service_id: None,
            },
            services: default_services(),
            coupons: default_coupons(),
        }
    }
}

fn default_services() -> Vec<Service> {
    let fixed = [
        ("itr-standard", 999.0),
        ("itr-multiple-form-16", 1599.0),
        ("itr-business-income", 2499.0),
        ("itr-capital-gain", 3299.0),
        ("itr-nri", 6499.0),
        ("itr-foreign", 9999.0),
        ("tax-planning-basic", 999.0),
        ("tax-planning-standard", 2999.0),
        ("tax-planning-premium", 6999.0),
        ("first-consultation-call", 99.0),
    ];

    let mut services: Vec<Service> = fixed
        .iter()
        .map(|(id, base_price)| Service {
            id: id.to_string(),
            base_price: *base_price,
            editable: false,
        })
        .collect();

    services.push(Service {
        id: DEFAULT_CUSTOM_SERVICE_ID.to_string(),
        base_price: 0.0,
        editable: true,
    });

    services
}

fn default_coupons() -> Vec<CouponRule> {
    [("FINGARD5", 5.0), ("FINGARD10", 10.0), ("FINGARD15", 15.0)]
        .iter()
        .map(|(code, value)| CouponRule {
            code: code.to_string(),
            kind: CouponKind::Percent,
            value: *value,
        })
        .collect()
}

impl CheckoutConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckoutError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CheckoutError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RAZORPAY_KEY_ID})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn custom_service_id(&self) -> &str {
        self.payment
            .custom_service_id
            .as_deref()
            .unwrap_or(DEFAULT_CUSTOM_SERVICE_ID)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("contact.endpoint", &self.contact.endpoint)?;
        validate_non_empty_string("business.name", &self.business.name)?;
        validate_non_empty_string("payment.currency", &self.payment.currency)?;
        validate_non_empty_string("payment.key_id", &self.payment.key_id)?;

        if self.services.is_empty() {
            return Err(CheckoutError::MissingConfig {
                field: "services".to_string(),
            });
        }

        let custom_id = self.custom_service_id();
        for service in &self.services {
            if service.base_price < 0.0 {
                return Err(CheckoutError::InvalidConfigValue {
                    field: format!("services.{}.base_price", service.id),
                    value: service.base_price.to_string(),
                    reason: "Price cannot be negative".to_string(),
                });
            }
            // Only the custom entry takes a caller-supplied amount.
            if service.editable && service.id != custom_id {
                return Err(CheckoutError::InvalidConfigValue {
                    field: format!("services.{}.editable", service.id),
                    value: "true".to_string(),
                    reason: format!("Only the \"{}\" service is editable", custom_id),
                });
            }
        }

        for coupon in &self.coupons {
            validate_non_empty_string("coupons.code", &coupon.code)?;
            match coupon.kind {
                CouponKind::Percent => {
                    validate_range("coupons.value", coupon.value, 0.0, 100.0)?;
                }
                CouponKind::Flat => {
                    if coupon.value < 0.0 {
                        return Err(CheckoutError::InvalidConfigValue {
                            field: "coupons.value".to_string(),
                            value: coupon.value.to_string(),
                            reason: "Flat discount cannot be negative".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for CheckoutConfig {
    fn business_name(&self) -> &str {
        &self.business.name
    }

    fn theme_color(&self) -> &str {
        &self.business.theme_color
    }

    fn logo_url(&self) -> Option<&str> {
        self.business.logo_url.as_deref()
    }

    fn currency(&self) -> &str {
        &self.payment.currency
    }

    fn custom_service_id(&self) -> &str {
        self.custom_service_id()
    }

    fn services(&self) -> &[Service] {
        &self.services
    }

    fn coupons(&self) -> &[CouponRule] {
        &self.coupons
    }
}

impl Validate for CheckoutConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
