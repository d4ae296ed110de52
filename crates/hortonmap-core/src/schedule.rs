//! Weekly opening-hours model.
//!
//! A [`WeeklySchedule`] always carries all seven days. Each day holds a
//! [`ScheduleEntry`], which serializes to the exact strings stored documents
//! have always used: `"closed"`, `"24/7"`, or `"<open> - <close>"`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

/// Days in week order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const CLOSED: &str = "closed";
const ALWAYS_OPEN: &str = "24/7";
const NOT_PROVIDED: &str = "not provided";
const UNPARSED: &str = "NaN:NaN";
const INTERVAL_SEPARATOR: &str = " - ";

/// Lowercase document key for a day (`"monday"` .. `"sunday"`).
#[must_use]
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Hour and minute of a 24-hour clock.
///
/// Renders without zero padding: 05:03 is `5:3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    #[must_use]
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.minute
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

/// One side of an opening interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEnd {
    At(ClockTime),
    /// Nothing was paired with this side. Renders as `not provided`.
    NotProvided,
    /// A value was present but was not a clock time. Renders as `NaN:NaN`.
    Unparsed,
}

impl IntervalEnd {
    #[must_use]
    pub fn time(self) -> Option<ClockTime> {
        match self {
            IntervalEnd::At(time) => Some(time),
            IntervalEnd::NotProvided | IntervalEnd::Unparsed => None,
        }
    }
}

impl From<ClockTime> for IntervalEnd {
    fn from(time: ClockTime) -> Self {
        IntervalEnd::At(time)
    }
}

impl fmt::Display for IntervalEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalEnd::At(time) => write!(f, "{time}"),
            IntervalEnd::NotProvided => f.write_str(NOT_PROVIDED),
            IntervalEnd::Unparsed => f.write_str(UNPARSED),
        }
    }
}

impl FromStr for IntervalEnd {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NOT_PROVIDED => Ok(IntervalEnd::NotProvided),
            UNPARSED => Ok(IntervalEnd::Unparsed),
            _ => s.parse().map(IntervalEnd::At),
        }
    }
}

/// One day's state in a [`WeeklySchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleEntry {
    #[default]
    Closed,
    AlwaysOpen,
    Interval {
        open: IntervalEnd,
        close: IntervalEnd,
    },
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleEntry::Closed => f.write_str(CLOSED),
            ScheduleEntry::AlwaysOpen => f.write_str(ALWAYS_OPEN),
            ScheduleEntry::Interval { open, close } => {
                write!(f, "{open}{INTERVAL_SEPARATOR}{close}")
            }
        }
    }
}

impl FromStr for ScheduleEntry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CLOSED => Ok(ScheduleEntry::Closed),
            ALWAYS_OPEN => Ok(ScheduleEntry::AlwaysOpen),
            _ => {
                let (open, close) = s
                    .split_once(INTERVAL_SEPARATOR)
                    .ok_or_else(|| CoreError::InvalidScheduleEntry(s.to_string()))?;
                Ok(ScheduleEntry::Interval {
                    open: open.parse()?,
                    close: close.parse()?,
                })
            }
        }
    }
}

impl Serialize for ScheduleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Seven-day schedule, Monday through Sunday.
///
/// Serializes as an object with the keys `monday`..`sunday` in week order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WeekRepr", into = "WeekRepr")]
pub struct WeeklySchedule {
    days: [ScheduleEntry; 7],
}

impl WeeklySchedule {
    /// Every day closed.
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// Every day `24/7`.
    #[must_use]
    pub fn always_open() -> Self {
        Self {
            days: [ScheduleEntry::AlwaysOpen; 7],
        }
    }

    #[must_use]
    pub fn get(&self, day: Weekday) -> ScheduleEntry {
        self.days[day.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, day: Weekday, entry: ScheduleEntry) {
        self.days[day.num_days_from_monday() as usize] = entry;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, ScheduleEntry)> + '_ {
        WEEK.iter().map(|&day| (day, self.get(day)))
    }

    #[must_use]
    pub fn is_closed_all_week(&self) -> bool {
        self.days.iter().all(|e| *e == ScheduleEntry::Closed)
    }

    #[must_use]
    pub fn is_always_open(&self) -> bool {
        self.days.iter().all(|e| *e == ScheduleEntry::AlwaysOpen)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeekRepr {
    monday: ScheduleEntry,
    tuesday: ScheduleEntry,
    wednesday: ScheduleEntry,
    thursday: ScheduleEntry,
    friday: ScheduleEntry,
    saturday: ScheduleEntry,
    sunday: ScheduleEntry,
}

impl From<WeekRepr> for WeeklySchedule {
    fn from(w: WeekRepr) -> Self {
        Self {
            days: [
                w.monday,
                w.tuesday,
                w.wednesday,
                w.thursday,
                w.friday,
                w.saturday,
                w.sunday,
            ],
        }
    }
}

impl From<WeeklySchedule> for WeekRepr {
    fn from(s: WeeklySchedule) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = s.days;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}
