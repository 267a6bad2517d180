//! Console formatting of prices.

/// Formats `value` as US dollars with thousands separators and two decimals.
///
/// ```
/// use bond_cli::format::format_currency;
///
/// assert_eq!(format_currency(1000.0), "$1,000.00");
/// assert_eq!(format_currency(-1234567.891), "-$1,234,567.89");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to zero and prints unsigned
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// The single result line printed by both commands.
pub fn price_line(price: f64) -> String {
    format!("The bond price is: {}", format_currency(price))
}
