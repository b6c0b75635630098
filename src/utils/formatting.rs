//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Currency amount with two decimals, e.g. `$115.00`. Halves round away from zero.
pub fn money(amount: Decimal, symbol: &str) -> String {
    let mut v = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(2);
    format!("{}{}", symbol, v)
}

/// Short day label used in confirmations, e.g. `May 01`.
pub fn short_date(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}

pub fn lessons_label(n: usize) -> String {
    if n == 1 {
        "1 lesson".to_string()
    } else {
        format!("{n} lessons")
    }
}
