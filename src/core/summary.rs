use crate::domain::model::{PaymentSummary, Quote};

/// "₹" plus en-IN digit grouping: the last three integer digits form one
/// group, every group above it has two (12,34,567). Fractions keep up to
/// three digits with trailing zeros trimmed.
pub fn format_inr(amount: f64) -> String {
    let mut text = format!("{:.3}", amount.abs());

    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    let (int_digits, fraction) = match text.split_once('.') {
        Some((int_digits, fraction)) => (int_digits.to_string(), Some(fraction.to_string())),
        None => (text, None),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let grouped = group_indian(&int_digits);

    match fraction {
        Some(fraction) => format!("₹{}{}.{}", sign, grouped, fraction),
        None => format!("₹{}{}", sign, grouped),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Map a quote to display strings. The discount row shows whenever a
/// coupon is applied, even at a zero discount; without one the row hides
/// and the discount cell resets to ₹0.
pub fn render_summary(quote: &Quote, coupon_applied: bool) -> PaymentSummary {
    PaymentSummary {
        service_amount: format_inr(quote.base_amount),
        discount_amount: if coupon_applied {
            format_inr(quote.discount_amount)
        } else {
            "₹0".to_string()
        },
        total_amount: format_inr(quote.final_amount),
        discount_visible: coupon_applied,
    }
}
