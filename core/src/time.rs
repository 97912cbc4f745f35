//! Time related utils.

use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the RFC 1123 form used by `x-ms-date`.
///
/// The zone is always written as the literal `GMT`:
///
/// ```
/// use chrono::TimeZone;
/// use docdb_core::time::format_http_date;
///
/// let t = chrono::Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(format_http_date(t), "Mon, 02 Jan 2006 15:04:05 GMT");
/// ```
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
