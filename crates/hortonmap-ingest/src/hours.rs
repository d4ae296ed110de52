//! Opening-hours normalization.
//!
//! The export stores hours as a Python-dict-like blob:
//!
//! ```text
//! {'_type': 'hoursOfOperation', 'mon': '2021-03-01 23:00:00', 'mon_2': '2021-03-01 05:00:00', ...}
//! ```
//!
//! Keys name a day (a day may appear twice, once per half of an interval) and
//! values are timestamps of which only the wall-clock time matters. The blob
//! is rewritten into a JSON object, parsed in encounter order, and folded into
//! a [`WeeklySchedule`].
//!
//! Blobs whose day count does not match their interval count describe
//! continuous operation and become `24/7` on every day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use hortonmap_core::{ClockTime, IntervalEnd, ScheduleEntry, WeeklySchedule};
use serde_json::{Map, Value};

use crate::error::HoursError;

/// Substrings that identify a day inside a blob key, in match priority order.
const DAY_MARKERS: [(&str, Weekday); 7] = [
    ("fri", Weekday::Fri),
    ("mon", Weekday::Mon),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
    ("thr", Weekday::Thu),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Result of normalizing one blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHours {
    pub schedule: WeeklySchedule,
    /// Values that did not parse as a timestamp; they render as `NaN:NaN`.
    pub unparsed_times: Vec<String>,
}

/// Normalize a raw hours blob into a seven-day schedule.
///
/// An empty blob (only the `_type` entry, or nothing at all) means the
/// location offers no service of this kind and yields all `closed`.
///
/// # Errors
///
/// Returns [`HoursError::Malformed`] when the rewritten blob is not a valid
/// key/value mapping.
pub fn normalize_hours(blob: &str) -> Result<NormalizedHours, HoursError> {
    let entries = parse_hours_map(blob)?;

    let mut schedule = WeeklySchedule::closed();
    let mut unparsed_times = Vec::new();

    if entries.is_empty() {
        return Ok(NormalizedHours {
            schedule,
            unparsed_times,
        });
    }

    let days = open_days(entries.keys().map(String::as_str));

    let times: Vec<IntervalEnd> = entries
        .values()
        .map(|value| {
            let raw = value_text(value);
            match parse_clock_time(&raw) {
                Some(time) => IntervalEnd::At(time),
                None => {
                    unparsed_times.push(raw);
                    IntervalEnd::Unparsed
                }
            }
        })
        .collect();

    let intervals = pair_intervals(&times);

    if days.len() == intervals.len() {
        for (day, interval) in days.into_iter().zip(intervals) {
            schedule.set(day, interval);
        }
    } else {
        schedule = WeeklySchedule::always_open();
    }

    Ok(NormalizedHours {
        schedule,
        unparsed_times,
    })
}

/// Rewrite the blob into a JSON object literal and parse it, keeping key order.
///
/// The `_type` entry is dropped. Later duplicates of a key overwrite the
/// value but keep the first position.
fn parse_hours_map(blob: &str) -> Result<Map<String, Value>, HoursError> {
    let body = blob.trim().trim_matches('"').trim();
    let body = body.strip_prefix('{').unwrap_or(body);
    let body = body.strip_suffix('}').unwrap_or(body);

    let fragments: Vec<String> = body
        .split(',')
        .map(|fragment| fragment.replace('\'', "\"").trim().to_string())
        .filter(|fragment| !fragment.is_empty() && !is_type_entry(fragment))
        .collect();

    if fragments.is_empty() {
        return Ok(Map::new());
    }

    let literal = format!("{{{}}}", fragments.join(","));
    serde_json::from_str::<Map<String, Value>>(&literal).map_err(|e| HoursError::Malformed {
        reason: e.to_string(),
    })
}

fn is_type_entry(fragment: &str) -> bool {
    fragment
        .split_once(':')
        .is_some_and(|(key, _)| key.trim().trim_matches('"') == "_type")
}

/// Distinct days named by `keys`, in first-seen order.
///
/// Matching is a case-insensitive substring test, so `fri`, `fri_2` and
/// `Friday` all name Friday. Keys that name no day are skipped.
pub(crate) fn open_days<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = Vec::new();
    for key in keys {
        let key = key.to_ascii_lowercase();
        let day = DAY_MARKERS
            .iter()
            .find(|(marker, _)| key.contains(marker))
            .map(|(_, day)| *day);
        if let Some(day) = day {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}

/// Pair formatted times into intervals.
///
/// Within a pair the earlier value is the closing time and the later one the
/// opening time. Pairs are taken at even offsets only; the odd-offset pairs
/// straddle two days and are discarded. A trailing unpaired value yields an
/// interval whose opening half is `not provided`.
pub(crate) fn pair_intervals(times: &[IntervalEnd]) -> Vec<ScheduleEntry> {
    times
        .chunks(2)
        .map(|pair| ScheduleEntry::Interval {
            open: pair.get(1).copied().unwrap_or(IntervalEnd::NotProvided),
            close: pair[0],
        })
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Wall-clock time of a timestamp value, as written.
///
/// Offsets on RFC 3339 values are not applied; `05:00-04:00` is `5:0`.
pub(crate) fn parse_clock_time(raw: &str) -> Option<ClockTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().time().into());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.time())
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|_| NaiveTime::MIN)
        })
        .map(ClockTime::from)
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod tests;
