// ── Stat formatting ──

use resqtrack_api::TotalAmount;

/// Donation total for the stats panel. Pre-formatted backend text is shown
/// as-is; a bare number becomes rupees with grouping and two decimals.
pub fn total_amount(amount: &TotalAmount) -> String {
    match amount {
        TotalAmount::Formatted(text) => text.clone(),
        TotalAmount::Number(value) => rupees(*value),
    }
}

/// `1234.5` → `₹1,234.50`.
pub fn rupees(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac}")
}
