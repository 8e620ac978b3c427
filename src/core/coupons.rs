use crate::domain::model::CouponRule;
use std::collections::HashMap;

/// Immutable coupon table. Lookup is case- and whitespace-insensitive;
/// unknown codes are simply absent, never an error.
#[derive(Debug, Clone, Default)]
pub struct CouponRegistry {
    rules: HashMap<String, CouponRule>,
}

impl CouponRegistry {
    pub fn new(rules: impl IntoIterator<Item = CouponRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| (normalize(&rule.code), rule))
            .collect();

        Self { rules }
    }

    pub fn lookup(&self, code: &str) -> Option<&CouponRule> {
        self.rules.get(&normalize(code))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CouponKind;

    fn registry() -> CouponRegistry {
        CouponRegistry::new(vec![CouponRule {
            code: "FINGARD10".to_string(),
            kind: CouponKind::Percent,
            value: 10.0,
        }])
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let registry = registry();
        let canonical = registry.lookup("FINGARD10").unwrap();
        let sloppy = registry.lookup(" fingard10 ").unwrap();
        assert_eq!(canonical.code, sloppy.code);
        assert_eq!(canonical.value, sloppy.value);
    }

    #[test]
    fn test_lookup_unknown_code_is_none() {
        assert!(registry().lookup("XYZ").is_none());
        assert!(registry().lookup("").is_none());
    }
}
