use chrono::NaiveDate;

/// The default trigger label format, e.g. `October 19, 2026`.
///
/// See [`chrono::format::strftime`] for the syntax.
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats `date` as `October 19, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Formats `date` with a user supplied strftime `format`.
///
/// An invalid format string falls back to [`LONG_DATE_FORMAT`] instead of panicking
/// the way `to_string` on chrono's lazy formatter would.
pub(crate) fn format_date(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write as _;

    let mut text = String::new();
    if write!(text, "{}", date.format(format)).is_err() {
        log::warn!("Invalid date format {format:?}, using {LONG_DATE_FORMAT:?}");
        return format_long_date(date);
    }
    text
}
