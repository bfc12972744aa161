//! Named places and their timezones.
//!
//! The solar calculation itself only ever sees a whole-hour UTC offset; this
//! module is where a place name turns into coordinates and a `chrono-tz` zone
//! whose offset (daylight saving included) is resolved for a given instant.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

pub const DEFAULT_LOCATION: &str = "xian";

// key, name, region, IANA zone, latitude, longitude
const PRESETS: &[(&str, &str, &str, &str, f64, f64)] = &[
    ("xian", "Xi'an", "China", "Asia/Shanghai", 34.2658, 108.9541),
    ("beijing", "Beijing", "China", "Asia/Shanghai", 39.9042, 116.4074),
    ("tokyo", "Tokyo", "Japan", "Asia/Tokyo", 35.6762, 139.6503),
    ("london", "London", "United Kingdom", "Europe/London", 51.5074, -0.1278),
    ("newyork", "New York", "United States", "America/New_York", 40.7128, -74.0060),
    ("springfield", "Springfield", "United States", "America/Chicago", 39.8, -89.6),
    ("tromso", "Tromsø", "Norway", "Europe/Oslo", 69.6492, 18.9553),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub timezone: Tz,
    pub latitude: f64,
    pub longitude: f64,
}

fn preset_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

impl Location {
    /// Looks up a preset by name, ignoring case and punctuation
    /// ("Xi'an", "xian" and "XIAN" are the same place).
    pub fn preset(name: &str) -> Result<Self> {
        let key = preset_key(name);
        let &(_, display, region, zone, latitude, longitude) = PRESETS
            .iter()
            .find(|p| p.0 == key)
            .ok_or_else(|| Error::UnknownLocation(name.to_string()))?;
        Ok(Self {
            name: display.to_string(),
            region: region.to_string(),
            timezone: parse_timezone(zone)?,
            latitude,
            longitude,
        })
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|p| p.0)
    }

    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// Wall-clock time at this location. Ambiguous times during a DST
    /// fall-back resolve to the earlier instant.
    pub fn local_datetime(&self, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Tz>> {
        self.timezone
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .ok_or(Error::TimestampOutOfRange)
    }
}
