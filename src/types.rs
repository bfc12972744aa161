use std::fmt;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Timelike,
};

use crate::error::{Error, Result};

pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

/// Which side of the sunrise zenith the sun stays on for a whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    PolarDay,
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => write!(f, "polar day"),
            PolarCondition::PolarNight => write!(f, "polar night"),
        }
    }
}

/// Date, clock time, whole-hour UTC offset and position of one calculation.
///
/// Constructors validate every field, so a request that exists is always
/// computable up to the polar day/night check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    date: NaiveDate,
    time: NaiveTime,
    utc_offset_hours: i32,
    latitude: f64,
    longitude: f64,
}

impl ObservationRequest {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_hours: i32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude { value: longitude });
        }
        if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&utc_offset_hours) {
            return Err(Error::InvalidUtcOffset {
                seconds: utc_offset_hours.saturating_mul(3600),
            });
        }
        Ok(Self {
            date,
            time,
            utc_offset_hours,
            latitude,
            longitude,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: i32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(Error::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or(Error::InvalidTime { hour, minute, second })?;
        Self::new(date, time, utc_offset_hours, latitude, longitude)
    }

    /// Takes date, clock time and offset from a zoned timestamp. The zone's
    /// offset at that instant must be a whole number of hours.
    pub fn from_datetime<Tz: TimeZone>(
        dt: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let seconds = dt.offset().fix().local_minus_utc();
        if seconds % 3600 != 0 {
            return Err(Error::InvalidUtcOffset { seconds });
        }
        let local = dt.naive_local();
        Self::new(local.date(), local.time(), seconds / 3600, latitude, longitude)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    pub day_of_year: u32,
    /// Fractional year angle γ, radians.
    pub fractional_year: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// Radians.
    pub declination: f64,
    /// Minutes.
    pub time_offset: f64,
    /// Minutes from local midnight.
    pub true_solar_time: f64,
    /// Degrees, at the requested clock time.
    pub hour_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseSunset {
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    /// Degrees; the sunset hour angle is its negation.
    pub sunrise_hour_angle: f64,
}

impl SunriseSunset {
    pub fn sunset_hour_angle(&self) -> f64 {
        -self.sunrise_hour_angle
    }

    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}
