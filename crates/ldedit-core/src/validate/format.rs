//! Per-kind value format checks.
//!
//! The checks are loose. They accept anything that looks like a URL, date,
//! number or email, without checking schema.org conformance.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use time::format_description::well_known::{Iso8601, Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::catalog::PropertyKind;

/// `something@something.something`, whitespace excluded.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Check a non-blank value against a declared kind.
pub fn check(kind: PropertyKind, value: &Value) -> bool {
    match kind {
        PropertyKind::Text => true,
        PropertyKind::Number => is_number(value),
        PropertyKind::Url => value.as_str().is_some_and(is_url),
        PropertyKind::Date | PropertyKind::DateTime => value.as_str().is_some_and(is_date),
        PropertyKind::Email => value.as_str().is_some_and(is_email),
    }
}

/// Absolute, well-formed URL (scheme required).
pub fn is_url(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

/// A real calendar date or date-time in one of the common textual forms.
pub fn is_date(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }

    OffsetDateTime::parse(s, &Rfc3339).is_ok()
        || OffsetDateTime::parse(s, &Iso8601::DEFAULT).is_ok()
        || PrimitiveDateTime::parse(s, &Iso8601::DEFAULT).is_ok()
        || Date::parse(s, &Iso8601::DEFAULT).is_ok()
        || OffsetDateTime::parse(s, &Rfc2822).is_ok()
        || PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .is_ok()
        || PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .is_ok()
        || is_year_or_year_month(s)
        || is_written_date(s)
}

/// Slash-separated and month-name layouts, e.g. `2025/06/01`, `06/01/2025`,
/// `June 1, 2025`, `Jun 1, 2025`, `1 June 2025`. Slash dates are month first.
fn is_written_date(s: &str) -> bool {
    Date::parse(s, format_description!("[year]/[month padding:none]/[day padding:none]")).is_ok()
        || Date::parse(s, format_description!("[month padding:none]/[day padding:none]/[year]"))
            .is_ok()
        || Date::parse(s, format_description!("[month repr:long] [day padding:none], [year]"))
            .is_ok()
        || Date::parse(s, format_description!("[month repr:short] [day padding:none], [year]"))
            .is_ok()
        || Date::parse(s, format_description!("[month repr:long] [day padding:none] [year]"))
            .is_ok()
        || Date::parse(s, format_description!("[day padding:none] [month repr:long] [year]"))
            .is_ok()
        || Date::parse(s, format_description!("[day padding:none] [month repr:short] [year]"))
            .is_ok()
}

/// `YYYY` or `YYYY-MM`.
fn is_year_or_year_month(s: &str) -> bool {
    let (year, month) = match s.split_once('-') {
        Some((y, m)) => (y, Some(m)),
        None => (s, None),
    };

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match month {
        None => true,
        Some(m) => {
            m.len() == 2
                && m.bytes().all(|b| b.is_ascii_digit())
                && matches!(m.parse::<u8>(), Ok(1..=12))
        }
    }
}

/// Finite JSON number, or a string holding one (surrounding whitespace allowed).
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

pub fn is_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}
