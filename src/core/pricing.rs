use crate::domain::model::{CouponKind, Quote, QuoteInput};

/// Compute the payable quote for a base amount and optional coupon. Pure
/// and deterministic; negative or NaN base amounts collapse to zero.
///
/// Flat discounts are not clamped to the base amount before the floor:
/// `discount_amount` may exceed `base_amount` while `final_amount` stops
/// at zero.
pub fn quote(input: &QuoteInput) -> Quote {
    let base_amount = input.base_amount.max(0.0);

    let discount_amount = match &input.coupon {
        Some(coupon) => match coupon.kind {
            CouponKind::Percent => base_amount * coupon.value / 100.0,
            CouponKind::Flat => coupon.value,
        },
        None => 0.0,
    };

    let final_amount = (base_amount - discount_amount).max(0.0);

    Quote {
        base_amount,
        discount_amount,
        final_amount,
    }
}

/// Round to the smallest transactable unit (paise). Applied only when
/// building the gateway payload; display keeps full precision.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CouponRule;

    fn percent(value: f64) -> Option<CouponRule> {
        Some(CouponRule {
            code: format!("FINGARD{}", value),
            kind: CouponKind::Percent,
            value,
        })
    }

    fn flat(value: f64) -> Option<CouponRule> {
        Some(CouponRule {
            code: "FLAT".to_string(),
            kind: CouponKind::Flat,
            value,
        })
    }

    #[test]
    fn test_quote_without_coupon_is_identity() {
        for base in [0.0, 99.0, 999.0, 6499.0] {
            let quote = quote(&QuoteInput {
                base_amount: base,
                coupon: None,
            });
            assert_eq!(quote.base_amount, base);
            assert_eq!(quote.discount_amount, 0.0);
            assert_eq!(quote.final_amount, base);
        }
    }

    #[test]
    fn test_quote_with_percent_coupon() {
        let quote = quote(&QuoteInput {
            base_amount: 999.0,
            coupon: percent(10.0),
        });
        assert!((quote.discount_amount - 99.9).abs() < 1e-9);
        assert!((quote.final_amount - 899.1).abs() < 1e-9);
    }

    #[test]
    fn test_quote_with_flat_coupon() {
        let quote = quote(&QuoteInput {
            base_amount: 999.0,
            coupon: flat(200.0),
        });
        assert_eq!(quote.discount_amount, 200.0);
        assert_eq!(quote.final_amount, 799.0);
    }

    #[test]
    fn test_flat_coupon_exceeding_base_floors_at_zero() {
        let quote = quote(&QuoteInput {
            base_amount: 99.0,
            coupon: flat(500.0),
        });
        // Unclamped discount, floored final.
        assert_eq!(quote.discount_amount, 500.0);
        assert_eq!(quote.final_amount, 0.0);
    }

    #[test]
    fn test_full_percent_discount_never_goes_negative() {
        let quote = quote(&QuoteInput {
            base_amount: 999.0,
            coupon: percent(100.0),
        });
        assert_eq!(quote.final_amount, 0.0);
    }

    #[test]
    fn test_negative_and_nan_base_collapse_to_zero() {
        let negative = quote(&QuoteInput {
            base_amount: -50.0,
            coupon: None,
        });
        assert_eq!(negative.base_amount, 0.0);
        assert_eq!(negative.final_amount, 0.0);

        let nan = quote(&QuoteInput {
            base_amount: f64::NAN,
            coupon: percent(10.0),
        });
        assert_eq!(nan.base_amount, 0.0);
        assert_eq!(nan.final_amount, 0.0);
    }

    #[test]
    fn test_zero_base_with_coupon_is_a_zero_quote() {
        let quote = quote(&QuoteInput {
            base_amount: 0.0,
            coupon: percent(10.0),
        });
        assert_eq!(quote.base_amount, 0.0);
        assert_eq!(quote.discount_amount, 0.0);
        assert_eq!(quote.final_amount, 0.0);
    }

    #[test]
    fn test_to_minor_units_rounds_to_paise() {
        assert_eq!(to_minor_units(899.1), 89910);
        assert_eq!(to_minor_units(999.0), 99900);
        assert_eq!(to_minor_units(0.0), 0);
        assert_eq!(to_minor_units(0.005), 1);
    }
}
