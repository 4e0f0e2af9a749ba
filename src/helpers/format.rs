//! Format - Argentine Money and Date Formatting
//!
//! Mirrors the `es-AR` locale: `.` groups thousands, `,` separates decimals,
//! currency values read `$ 1.250.000,75` with a non-breaking space.

use crate::constants::ARGENTINA_UTC_OFFSET_SECS;
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Non-breaking space between the currency sign and the amount
const NBSP: char = '\u{a0}';

/// Group an unsigned digit string with `.` every three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }

    result
}

/// Format an amount as Argentine pesos: `$ 1.250.000,75`, `-$ 150.000,00`
pub fn format_ars(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}{},{}",
        if negative { "-" } else { "" },
        NBSP,
        group_thousands(int_part),
        frac_part
    )
}

/// Format a quote price with two decimals and no grouping: `$1270.00`
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Format a count with an explicit plus sign: `+124`
pub fn format_count(count: u32) -> String {
    format!("+{count}")
}

/// Format a date as dd/mm/yyyy in Argentine time
pub fn format_date(dt: &DateTime<Utc>) -> String {
    match FixedOffset::east_opt(ARGENTINA_UTC_OFFSET_SECS) {
        Some(offset) => dt.with_timezone(&offset).format("%d/%m/%Y").to_string(),
        None => dt.format("%d/%m/%Y").to_string(),
    }
}

/// Format a percentage with two decimals: `47,30 %`, `-12,50 %`
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}{},{}{}%",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part,
        NBSP
    )
}

/// Chart axis tick in thousands: `$15k`, `$12.5k`
pub fn format_thousands_tick(value: u64) -> String {
    format!("${}k", value as f64 / 1000.0)
}

/// Quick amount button label: `$1k`, `$25k`
pub fn format_quick_amount(amount: u64) -> String {
    format_thousands_tick(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_ars() {
        assert_eq!(format_ars(dec!(1250000.75)), "$\u{a0}1.250.000,75");
        assert_eq!(format_ars(dec!(464550.25)), "$\u{a0}464.550,25");
        assert_eq!(format_ars(dec!(120000)), "$\u{a0}120.000,00");
        assert_eq!(format_ars(dec!(999)), "$\u{a0}999,00");
        assert_eq!(format_ars(dec!(0)), "$\u{a0}0,00");
    }

    #[test]
    fn test_format_ars_negative() {
        assert_eq!(format_ars(dec!(-150000)), "-$\u{a0}150.000,00");
        assert_eq!(format_ars(dec!(-0.001)), "$\u{a0}0,00");
    }

    #[test]
    fn test_format_ars_rounds_half_away_from_zero() {
        assert_eq!(format_ars(dec!(10.005)), "$\u{a0}10,01");
        assert_eq!(format_ars(dec!(-10.005)), "-$\u{a0}10,01");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(47.2973)), "47,30\u{a0}%");
        assert_eq!(format_percent(dec!(-1250.5)), "-1.250,50\u{a0}%");
        assert_eq!(format_percent(dec!(0)), "0,00\u{a0}%");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(1270)), "$1270.00");
        assert_eq!(format_price(dec!(234.55)), "$234.55");
    }

    #[test]
    fn test_format_date_uses_argentine_day() {
        let dt = Utc.with_ymd_and_hms(2025, 8, 18, 10, 30, 0).single().expect("valid");
        assert_eq!(format_date(&dt), "18/08/2025");

        // 01:00 UTC is still the previous evening in Buenos Aires
        let late = Utc.with_ymd_and_hms(2025, 8, 18, 1, 0, 0).single().expect("valid");
        assert_eq!(format_date(&late), "17/08/2025");
    }

    #[test]
    fn test_thousands_ticks() {
        assert_eq!(format_thousands_tick(15_000), "$15k");
        assert_eq!(format_thousands_tick(12_500), "$12.5k");
        assert_eq!(format_thousands_tick(0), "$0k");
        assert_eq!(format_quick_amount(1_000), "$1k");
        assert_eq!(format_count(124), "+124");
    }
}
