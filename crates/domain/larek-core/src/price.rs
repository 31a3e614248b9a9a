//! Display-price text handling.
//!
//! Prices cross the view boundary as decorated strings
//! ("1 234 синапсов", "Бесценно"). Extraction must never produce a
//! non-number: anything without digits, and anything that overflows,
//! falls back to 0 so total arithmetic stays well-defined.

pub const PRICELESS_LABEL: &str = "Бесценно";
pub const CURRENCY_SUFFIX: &str = "синапсов";

/// Extracts the numeric amount from a decorated price string.
///
/// Strips every non-digit character and parses the remainder;
/// yields 0 when no digits survive or the value does not fit.
pub fn parse_display_price(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Formats an amount with space-grouped thousands: 1234 -> "1 234".
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Renders a catalog price for display; `None` items are priceless.
pub fn format_price(price: Option<u64>) -> String {
    match price {
        None => PRICELESS_LABEL.to_string(),
        Some(amount) => format!("{} {}", format_amount(amount), CURRENCY_SUFFIX),
    }
}
