mod app_config;
mod config;
pub mod location;
pub mod schedule;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{BoundingBox, GeoPoint, LocationDocument, StoredLocation};
pub use schedule::{day_key, ClockTime, IntervalEnd, ScheduleEntry, WeeklySchedule, WEEK};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid schedule entry: {0:?}")]
    InvalidScheduleEntry(String),
    #[error("invalid clock time: {0:?}")]
    InvalidClockTime(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
