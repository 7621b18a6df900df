//! Deterministic date formatting for the verification reference date.
//!
//! The wire format and the witness both carry the date as eight ASCII
//! digits, `YYYYMMDD`. Formatting takes the date as an explicit argument
//! and uses a fixed format string, so the output never depends on locale
//! or process-global state.

use chrono::NaiveDate;

/// Format a date as `YYYYMMDD`.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// The `YYYYMMDD` digits of a date as witness bytes.
pub fn compact_date_bytes(date: NaiveDate) -> [u8; 8] {
    let text = compact_date(date);
    // Eight ASCII digits for any representable date in this range.
    text.as_bytes()
        .try_into()
        .expect("compact date is always eight ASCII digits")
}

/// Today's date in UTC, formatted as `YYYYMMDD`.
pub fn today_compact() -> String {
    compact_date(chrono::Utc::now().date_naive())
}
