//! Indian-locale money and number rendering for the dashboard surfaces.

/// Symbol shown before amounts.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";
/// ISO code of the profile currency.
pub const CURRENCY_CODE: &str = "INR";

/// `₹1,23,456.78` with up to two fraction digits and trailing zeros trimmed.
/// Anything unreadable renders as `₹0`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}0", CURRENCY_SYMBOL);
    }
    let body = render_decimal(amount.abs());
    if amount < 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, body)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, body)
    }
}

/// Indian-grouped plain number with the same fraction rules.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let body = render_decimal(value.abs());
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Compact tiers for tight cards: crores, lakhs, thousands, else rounded.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value >= 10_000_000.0 {
        format!("{:.1}Cr", value / 10_000_000.0)
    } else if value >= 100_000.0 {
        format!("{:.1}L", value / 100_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Share of `total` as `12.3%`. A zero or unreadable total reads as `0%`.
pub fn format_percentage(value: f64, total: f64) -> String {
    if !value.is_finite() || !total.is_finite() || total == 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Two-decimal rounding with trailing zeros trimmed, then Indian grouping.
fn render_decimal(value: f64) -> String {
    let mut body = format!("{:.2}", value);
    while body.ends_with('0') {
        body.pop();
    }
    if body.ends_with('.') {
        body.pop();
    }
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_indian(int_part), fraction),
        None => group_indian(&body),
    }
}

/// Indian digit grouping: rightmost three, then pairs (`12,34,567`).
fn group_indian(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count == 3 || (count > 3 && (count - 3) % 2 == 0) {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
