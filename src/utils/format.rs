use chrono::{Local, TimeZone};

use crate::models::balance::NATIVE_UNIT;

/// Shorten an address to its first and last 4 characters, `XXXX...YYYY`.
///
/// Inputs shorter than 8 characters are not special-cased: the two halves
/// overlap, so "AB" becomes "AB...AB".
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Balance fixed to 4 decimal places with the unit suffix
pub fn format_balance(balance: f64) -> String {
    format!("{:.4} {}", balance, NATIVE_UNIT)
}

/// Local time for a block timestamp, or "Pending" when there is none
pub fn format_block_time(block_time: Option<i64>) -> String {
    match block_time {
        Some(seconds) => match Local.timestamp_opt(seconds, 0).single() {
            Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => seconds.to_string(),
        },
        None => "Pending".to_string(),
    }
}

/// Amount as reported, blank if absent
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}
