use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Color applied to the change text. Serializes as its hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeColor {
    #[serde(rename = "#00ff00")]
    Positive,
    #[serde(rename = "#ff0000")]
    Negative,
}

impl ChangeColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Positive => "#00ff00",
            Self::Negative => "#ff0000",
        }
    }
}

/// Formatted quote values, each rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub is_positive: bool,
}

impl QuoteResult {
    /// Rounds the raw values and derives the sign from the rounded change.
    ///
    /// A change that rounds to zero is positive and never renders as `-0.00`.
    pub fn from_values(price: f64, change: f64, change_percent: f64) -> Self {
        let change = format_two_decimals(change);
        let is_positive = !change.starts_with('-');
        Self {
            price: format_two_decimals(price),
            change,
            change_percent: format_two_decimals(change_percent),
            is_positive,
        }
    }

    pub fn display(&self) -> QuoteDisplay {
        let sign = if self.is_positive { "+" } else { "" };
        QuoteDisplay {
            price_text: format!("${}", self.price),
            change_text: format!("{sign}{} ({}%)", self.change, self.change_percent),
            change_color: if self.is_positive {
                ChangeColor::Positive
            } else {
                ChangeColor::Negative
            },
        }
    }
}

/// Text and color pushed into the display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    pub price_text: String,
    pub change_text: String,
    pub change_color: ChangeColor,
}

/// Formats to two decimals, folding negative zero into `0.00`.
///
/// Ties on the exact binary value round away from zero, so `189.125`
/// becomes `189.13` while `1.005` (stored just below the tie) stays `1.00`.
pub fn format_two_decimals(value: f64) -> String {
    let formatted = match Decimal::from_f64_retain(value) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.2}"),
    };
    match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_owned()
        }
        _ => formatted,
    }
}

/// Parses the longest leading decimal number, ignoring trailing text such
/// as a `%` suffix. Returns `None` when no number prefix exists.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, ch)| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(index, ch)| index + ch.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
