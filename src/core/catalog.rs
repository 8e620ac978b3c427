use crate::domain::model::{AmountField, Service};
use crate::utils::error::{CheckoutError, Result};
use std::collections::HashMap;

/// Immutable service price table, built once from configuration.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: HashMap<String, Service>,
    custom_id: String,
}

impl Catalog {
    pub fn new(services: impl IntoIterator<Item = Service>, custom_id: impl Into<String>) -> Self {
        let services = services
            .into_iter()
            .map(|service| (service.id.clone(), service))
            .collect();

        Self {
            services,
            custom_id: custom_id.into(),
        }
    }

    pub fn get(&self, service_id: &str) -> Option<&Service> {
        self.services.get(service_id)
    }

    pub fn is_custom(&self, service_id: &str) -> bool {
        service_id == self.custom_id
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    /// Fixed price for a known service id. The custom entry reports its
    /// configured placeholder price; the real amount is caller-supplied.
    pub fn price_of(&self, service_id: &str) -> Result<f64> {
        match self.services.get(service_id) {
            Some(service) => Ok(service.base_price),
            None => Err(CheckoutError::UnknownService {
                id: service_id.to_string(),
            }),
        }
    }

    /// Display state for the amount input after a selection change: known
    /// ids fix their catalog price, the custom id opens the field for
    /// editing, anything else empties and locks it.
    pub fn amount_for_selection(&self, selection: &str) -> AmountField {
        if self.is_custom(selection) {
            return AmountField {
                value: None,
                editable: true,
            };
        }

        match self.services.get(selection) {
            Some(service) if !selection.is_empty() => AmountField {
                value: Some(service.base_price),
                editable: false,
            },
            _ => AmountField {
                value: None,
                editable: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Service {
                    id: "itr-standard".to_string(),
                    base_price: 999.0,
                    editable: false,
                },
                Service {
                    id: "custom".to_string(),
                    base_price: 0.0,
                    editable: true,
                },
            ],
            "custom",
        )
    }

    #[test]
    fn test_price_of_known_service() {
        assert_eq!(catalog().price_of("itr-standard").unwrap(), 999.0);
    }

    #[test]
    fn test_price_of_unknown_service() {
        let error = catalog().price_of("itr-premium").unwrap_err();
        assert!(matches!(
            error,
            CheckoutError::UnknownService { id } if id == "itr-premium"
        ));
    }

    #[test]
    fn test_amount_field_fixed_for_known_service() {
        let field = catalog().amount_for_selection("itr-standard");
        assert_eq!(field.value, Some(999.0));
        assert!(!field.editable);
    }

    #[test]
    fn test_amount_field_editable_for_custom() {
        let field = catalog().amount_for_selection("custom");
        assert_eq!(field.value, None);
        assert!(field.editable);
    }

    #[test]
    fn test_amount_field_locked_for_empty_selection() {
        let field = catalog().amount_for_selection("");
        assert_eq!(field.value, None);
        assert!(!field.editable);
    }
}
