use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

/// Solar zenith at sunrise/sunset (90.833°), in radians. Covers refraction
/// and the radius of the solar disk.
pub const SUNRISE_ZENITH_RAD: f64 = 1.5853349194640092;
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const SOLAR_NOON_MINUTES: f64 = 720.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn year_length(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// 1-based ordinal of the date within its year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    let dim = days_in_months(date.year());
    let sum: u32 = dim[..date.month0() as usize].iter().sum();
    sum + date.day()
}

/// Fractional year angle γ in radians. Only the hour of the clock time
/// contributes; minutes and seconds are dropped.
pub fn fractional_year(year: i32, day_of_year: u32, hour: u32) -> f64 {
    (2.0 * PI / year_length(year) as f64) * (day_of_year as f64 - 1.0 + hour as f64 / 24.0)
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Solar declination in radians.
pub fn solar_declination(gamma: f64) -> f64 {
    0.006918
        - 0.399912 * gamma.cos()
        + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Minutes between clock time and true solar time.
pub fn time_offset(eot: f64, longitude: f64, utc_offset_hours: i32) -> f64 {
    eot + MINUTES_PER_DEGREE * longitude - 60.0 * utc_offset_hours as f64
}

pub fn true_solar_time(hour: u32, minute: u32, second: u32, offset: f64) -> f64 {
    hour as f64 * 60.0 + minute as f64 + second as f64 / 60.0 + offset
}

/// Hour angle in degrees, negative before solar noon.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    true_solar_time / MINUTES_PER_DEGREE - 180.0
}

/// Argument of the arc-cosine that yields the sunrise hour angle. Outside
/// [-1, 1] the sun never crosses the sunrise zenith that day.
pub fn cos_sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    SUNRISE_ZENITH_RAD.cos() / (lat_rad.cos() * declination.cos())
        - lat_rad.tan() * declination.tan()
}

/// Sunrise hour angle in degrees from [`cos_sunrise_hour_angle`], or `None`
/// during polar day or night.
pub fn sunrise_hour_angle(cos_ha: f64) -> Option<f64> {
    if (-1.0..=1.0).contains(&cos_ha) {
        Some(rad_to_deg(cos_ha.acos()))
    } else {
        None
    }
}

/// UTC minutes from midnight at which the sun sits at the given hour angle.
pub fn event_minutes_utc(longitude: f64, hour_angle: f64, eot: f64) -> f64 {
    SOLAR_NOON_MINUTES - MINUTES_PER_DEGREE * (longitude + hour_angle) - eot
}
