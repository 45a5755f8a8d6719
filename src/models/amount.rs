//! Amount parsing and formatting
//!
//! Amounts are plain `f64` values. Balances are never rounded while they are
//! being computed; rounding to two decimal places happens only when an amount
//! is printed.

use std::fmt;

/// Currency symbols accepted in front of an amount
pub const CURRENCY_SYMBOLS: [&str; 5] = ["¥", "￥", "$", "€", "£"];

/// Parse a user-supplied amount
///
/// Accepts formats: "100", "12.50", "¥1,200", "$3.5". An optional leading
/// currency symbol (`symbol`, or one of [`CURRENCY_SYMBOLS`]) is ignored, as
/// are commas between thousands groups. Only positive finite values are
/// accepted.
pub fn parse_amount(s: &str, symbol: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();
    let invalid = || AmountParseError::InvalidFormat(trimmed.to_string());

    let number = strip_currency_symbol(trimmed, symbol);
    let cleaned = strip_thousands_separators(number).ok_or_else(invalid)?;

    let amount: f64 = cleaned.parse().map_err(|_| invalid())?;

    if !is_valid_amount(amount) {
        return Err(AmountParseError::NotPositive(trimmed.to_string()));
    }

    Ok(amount)
}

fn strip_currency_symbol<'a>(s: &'a str, symbol: &str) -> &'a str {
    let configured = Some(symbol).filter(|sym| !sym.is_empty());
    configured
        .into_iter()
        .chain(CURRENCY_SYMBOLS)
        .find_map(|sym| s.strip_prefix(sym))
        .map(str::trim_start)
        .unwrap_or(s)
}

/// Remove commas from the integer part, if they separate groups of three
fn strip_thousands_separators(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }

    let (integer, fraction) = match s.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (s, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let digits = integer.strip_prefix(['+', '-']).unwrap_or(integer);
    let is_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());

    let mut groups = digits.split(',');
    let first = groups.next()?;
    if !is_digits(first) || first.len() > 3 {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && is_digits(g)) {
        return None;
    }

    Some(s.replace(',', ""))
}

/// Whether an amount can be recorded as an expense
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Format an amount with a currency symbol and two decimal places
pub fn format_amount(amount: f64, symbol: &str) -> String {
    // Avoid printing "-0.00" for tiny negative residues
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded < 0.0 {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotPositive(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            Self::NotPositive(s) => write!(f, "Amount must be a positive number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
