use chrono::DateTime;
use chrono::Datelike;
use chrono::Utc;

const THIS_YEAR_FORMAT: &str = "%b %-d";
const OTHER_YEAR_FORMAT: &str = "%b %-d, %Y";

/// Render a millisecond timestamp as a short date, leaving out the year when
/// it matches the year of `now`: `"May 12"` versus `"May 12, 2019"`.
///
/// Timestamps outside chrono's range render as the unix epoch.
pub fn format_date_with_year_context(timestamp_millis: u64, now: DateTime<Utc>) -> String {
    let date = i64::try_from(timestamp_millis)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default();

    let format = if date.year() == now.year() {
        THIS_YEAR_FORMAT
    } else {
        OTHER_YEAR_FORMAT
    };
    date.format(format).to_string()
}
