//! Display Formatting Helpers
//!
//! Pure functions deriving display strings from raw API fields: abbreviated
//! addresses, absolute and relative timestamps, and fixed-decimal amounts.

use chrono::{DateTime, Local};

/// Abbreviate an address to first 4 + "..." + last 4 characters.
///
/// Empty input returns an empty string. Inputs shorter than 8 characters are
/// not rejected; the head and tail simply overlap.
pub fn abbreviate_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail_start = chars.len().saturating_sub(4);
    let tail: String = chars[tail_start..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format epoch seconds as a local date-time string.
///
/// Output depends on the host timezone; tests should not assert exact text.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => format!("timestamp: {}", timestamp),
    }
}

/// Format epoch seconds as a relative "N <unit>(s) ago" string.
///
/// Buckets use strict `<` boundaries at 60, 3600, 86400, 2592000 (30-day
/// month) and 31536000 (365-day year) seconds.
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;

    if diff < 60 {
        format!("{}s ago", diff)
    } else if diff < 3_600 {
        with_unit(diff / 60, "min")
    } else if diff < 86_400 {
        with_unit(diff / 3_600, "hour")
    } else if diff < 2_592_000 {
        with_unit(diff / 86_400, "day")
    } else if diff < 31_536_000 {
        with_unit(diff / 2_592_000, "month")
    } else {
        with_unit(diff / 31_536_000, "year")
    }
}

/// Relative time against the current system clock
pub fn relative_time_from_now(timestamp: i64) -> String {
    format_relative_time(timestamp, chrono::Utc::now().timestamp())
}

fn with_unit(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s ago", count, unit)
    } else {
        format!("{} {} ago", count, unit)
    }
}

/// SOL quantity with fixed 8-decimal formatting
pub fn format_sol(amount: f64) -> String {
    format!("{:.8} SOL", amount)
}

/// Token quantity with fixed 8-decimal formatting
pub fn format_amount(amount: f64) -> String {
    format!("{:.8}", amount)
}
