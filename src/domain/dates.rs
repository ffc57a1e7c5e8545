use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days since the epoch for a local-clock timestamp. The offset must be
/// the time-zone offset in effect at that same instant; zone rules shift with
/// daylight saving, so the lookup is per-instant, not per-zone.
#[must_use]
pub fn day_bucket(local_millis: i64, offset_millis: i64) -> i64 {
    (local_millis + offset_millis).div_euclid(MILLIS_PER_DAY)
}

/// Floors a UTC timestamp to midnight of its day. Idempotent.
#[must_use]
pub fn normalize_to_midnight_utc(utc_millis: i64) -> i64 {
    utc_millis.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY
}

#[must_use]
pub fn local_from_utc(utc_millis: i64, offset_millis: i64) -> i64 {
    utc_millis - offset_millis
}

#[must_use]
pub fn utc_from_local(local_millis: i64, offset_millis: i64) -> i64 {
    local_millis + offset_millis
}

/// Offset resolver backed by the system time zone, for the CLI path. Pure
/// callers (decoder tests, fixed-zone callers) supply their own closure.
#[must_use]
pub fn system_offset_millis(instant_millis: i64) -> i64 {
    Local
        .timestamp_millis_opt(instant_millis)
        .earliest()
        .map_or(0, |dt| i64::from(dt.offset().local_minus_utc()) * 1000)
}

/// Human-friendly label for a forecast day.
///
/// Today is always rendered with its date ("Today, June 8") regardless of
/// `force_full_date`. With `force_full_date` the label keeps the date and
/// swaps in "Tomorrow" for the next day; otherwise days inside the coming
/// week get a bare day name and anything further out an abbreviated date.
#[must_use]
pub fn friendly_day_label(
    now_local_millis: i64,
    target_local_millis: i64,
    force_full_date: bool,
    offset_at: impl Fn(i64) -> i64,
) -> String {
    let target_offset = offset_at(target_local_millis);
    let target_day = day_bucket(target_local_millis, target_offset);
    let current_day = day_bucket(now_local_millis, offset_at(now_local_millis));
    let diff = target_day - current_day;

    // Local-clock millis are offset-shifted; add the offset back before
    // formatting so the rendered date and weekday agree with the day bucket.
    let display_millis = target_local_millis + target_offset;

    if diff == 0 || force_full_date {
        let name = day_name(diff, display_millis);
        format!("{name}, {}", calendar(display_millis).format("%B %-d"))
    } else if diff > 0 && diff < 7 {
        day_name(diff, display_millis)
    } else {
        calendar(display_millis).format("%a, %b %-d").to_string()
    }
}

/// "Today", "Tomorrow", or the full weekday name.
fn day_name(diff_days: i64, display_millis: i64) -> String {
    match diff_days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => calendar(display_millis).format("%A").to_string(),
    }
}

/// Offset-adjusted millis viewed as a naive calendar datetime for formatting.
fn calendar(display_millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(display_millis)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
