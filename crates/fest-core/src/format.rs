//! Display formatting helpers shared by the render functions.
//!
//! The application's audience is German-speaking, so currency and dates use
//! the German conventions (`1.234,56 €`, `dd.mm.yyyy`). Server-sent strings
//! are passed through untouched.

use chrono::{DateTime, Utc};

/// Formats a price in cents as Euro, e.g. `123456` → `"1.234,56 €"`.
pub fn currency_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{sign}{},{:02} €",
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Formats a date as `dd.mm.yyyy`.
pub fn date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y").to_string()
}

/// Formats a timestamp as `dd.mm.yyyy hh:mm`.
pub fn date_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y %H:%M").to_string()
}

/// Formats a time of day as `hh:mm`.
pub fn time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Formats a byte count with a binary unit, e.g. `1536` → `"1,5 KB"`.
pub fn size_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        // German decimal comma, one decimal place
        format!("{:.1} {}", value, UNITS[unit]).replace('.', ",")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_currency_grouping_and_decimals() {
        assert_eq!(currency_cents(0), "0,00 €");
        assert_eq!(currency_cents(950), "9,50 €");
        assert_eq!(currency_cents(123_456), "1.234,56 €");
        assert_eq!(currency_cents(100_000_000), "1.000.000,00 €");
        assert_eq!(currency_cents(-4_999), "-49,99 €");
    }

    #[test]
    fn test_date_formats() {
        let t = Utc.with_ymd_and_hms(2025, 6, 14, 15, 30, 0).unwrap();
        assert_eq!(date(&t), "14.06.2025");
        assert_eq!(date_time(&t), "14.06.2025 15:30");
        assert_eq!(time(&t), "15:30");
    }

    #[test]
    fn test_size_units() {
        assert_eq!(size_bytes(0), "0 B");
        assert_eq!(size_bytes(999), "999 B");
        assert_eq!(size_bytes(1536), "1,5 KB");
        assert_eq!(size_bytes(5 * 1024 * 1024), "5,0 MB");
        assert_eq!(size_bytes(3 * 1024 * 1024 * 1024), "3,0 GB");
    }
}
