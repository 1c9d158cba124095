use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Combine split date ("YYYY-MM-DD") and time ("HH:MM") form fields into one
/// timestamp with the seconds pinned to zero. Malformed input yields `None`,
/// never a truncated value.
pub fn combine_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// Split a stored timestamp back into the ("YYYY-MM-DD", "HH:MM") pair used
/// to prefill the edit form.
pub fn split_date_time(value: &NaiveDateTime) -> (String, String) {
    (
        value.format("%Y-%m-%d").to_string(),
        value.format("%H:%M").to_string(),
    )
}
