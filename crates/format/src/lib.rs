//! Human-readable rendering of durations and flight quantities.
//!
//! Results span from seconds to millions of years and from kilograms to
//! planetary masses, so every renderer switches to scientific notation once a
//! figure stops being readable with thousands separators.

use accel_core::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR};
use accel_core::units::fraction_of_light;
use accel_precision::Magnitude;

/// Whole-unit counts at or above this are written in scientific notation.
const SCIENTIFIC_COUNT: f64 = 1_000_000.0;
/// Decimal exponent above which quantities are written in scientific notation.
const SCIENTIFIC_QUANTITY_EXPONENT: i64 = 6;

/// 2^53: above this an `f64` second count has no sub-year resolution left.
const MAX_EXACT_SECONDS: f64 = 9_007_199_254_740_992.0;

const DURATION_UNITS: [(&str, f64); 4] = [
    ("year", SECONDS_PER_YEAR),
    ("day", SECONDS_PER_DAY),
    ("hour", SECONDS_PER_HOUR),
    ("minute", SECONDS_PER_MINUTE),
];

/// Break `seconds` into years, days, hours, minutes and seconds.
///
/// Leading zero units are dropped, but once a unit has been written every
/// finer unit follows even when zero, so `3600` reads
/// `"1 hour, 0 minutes, 0.00 seconds"`. The seconds entry is always present:
/// a whole number of seconds prints without decimals (`7205` reads
/// `"2 hours, 0 minutes, 5 seconds"`), a fractional one with two
/// (`"1.50 seconds"`), and zero as `"0.00 seconds"`.
///
/// Beyond 2^53 seconds (about 285 million years) the input cannot resolve
/// anything finer than a year, so days through seconds are written as zero.
/// Negative and NaN inputs are treated as zero.
pub fn format_duration(seconds: f64) -> String {
    if seconds == f64::INFINITY {
        return "inf seconds".to_string();
    }
    let seconds = seconds.max(0.0);
    let mut whole = seconds.trunc();
    let fractional = seconds - whole;

    let mut parts: Vec<String> = Vec::new();
    for (name, length) in DURATION_UNITS {
        let value = (whole / length).floor();
        if value >= SCIENTIFIC_COUNT {
            parts.push(format!("{} {name}s", scientific_f64(value, 2)));
        } else if value == 1.0 {
            parts.push(format!("1 {name}"));
        } else if value > 1.0 || !parts.is_empty() {
            parts.push(format!("{value:.0} {name}s"));
        }
        whole = if whole > MAX_EXACT_SECONDS { 0.0 } else { whole % length };
    }

    parts.push(format_seconds(whole + fractional));
    parts.join(", ")
}

fn format_seconds(remainder: f64) -> String {
    if remainder == 1.0 {
        "1 second".to_string()
    } else if remainder > 0.0 && remainder.fract() == 0.0 {
        format!("{remainder:.0} seconds")
    } else {
        format!("{remainder:.2} seconds")
    }
}

/// `d.dd…e±NN` with `digits` fraction digits and at least two exponent digits.
pub fn format_scientific(value: Magnitude, digits: usize) -> String {
    let (mantissa, exponent) = value.rounded(digits);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa:.digits$}e{sign}{:02}", exponent.unsigned_abs())
}

fn scientific_f64(value: f64, digits: usize) -> String {
    match Magnitude::from_f64(value) {
        Ok(magnitude) => format_scientific(magnitude, digits),
        Err(_) => format!("{value:.digits$e}"),
    }
}

/// `"1,234.56 kg"` up to one million, `"1.23e+42 kg"` beyond.
pub fn format_quantity(value: Magnitude, unit: &str) -> String {
    if exceeds_million(&value) {
        format!("{} {unit}", format_scientific(value, 2))
    } else {
        format!("{} {unit}", group_thousands(value.to_f64(), 2))
    }
}

fn exceeds_million(value: &Magnitude) -> bool {
    value.exponent() > SCIENTIFIC_QUANTITY_EXPONENT
        || (value.exponent() == SCIENTIFIC_QUANTITY_EXPONENT && value.mantissa() > 1.0)
}

/// Peak velocity with its share of light speed, e.g.
/// `"1,056,030.30 m/s (0.352254% c)"`. Never switches to scientific notation.
pub fn format_velocity(velocity_m_s: f64) -> String {
    format!(
        "{} m/s ({:.6}% c)",
        group_thousands(velocity_m_s, 2),
        fraction_of_light(velocity_m_s) * 100.0
    )
}

/// Fixed-point rendering with `,` between groups of three integer digits.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
