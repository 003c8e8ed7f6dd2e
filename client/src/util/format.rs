//! Number and currency formatting for the es-AR locale.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency prefix shown before every amount.
pub const CURRENCY_PREFIX: &str = "ARS";

const GROUP_SEPARATOR: char = '.';

/// Group an integer's digits in thousands with `.` (`53600` -> `53.600`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Format an amount with the currency prefix (`53600` -> `ARS 53.600`).
pub fn format_currency(amount: i64) -> String {
    format!("{CURRENCY_PREFIX} {}", group_thousands(amount))
}
