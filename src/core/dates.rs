//! Date helpers shared across features.
//!
//! Statistics take `today` as an explicit argument so they stay
//! deterministic under test; only the CLI boundary asks for the clock.

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
