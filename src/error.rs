use thiserror::Error;

use crate::types::PolarCondition;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    /// Only whole-hour offsets between UTC-12 and UTC+14 are supported.
    #[error("unsupported UTC offset of {seconds} seconds (must be whole hours between -12 and +14)")]
    InvalidUtcOffset { seconds: i32 },

    /// The sun does not cross the sunrise zenith on this day.
    #[error("no sunrise or sunset ({condition}), arc-cosine argument {cos_hour_angle}")]
    NoSunriseSunset {
        condition: PolarCondition,
        cos_hour_angle: f64,
    },

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("timestamp out of range")]
    TimestampOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
