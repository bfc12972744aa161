pub mod angles;
pub mod error;
pub mod location;
pub mod sunrise;
pub mod types;

pub use angles::{
    cos_sunrise_hour_angle, day_of_year, days_in_months, deg_to_rad, equation_of_time,
    event_minutes_utc, fractional_year, hour_angle, leap_year, rad_to_deg, solar_declination,
    sunrise_hour_angle, time_offset, true_solar_time, year_length, MINUTES_PER_DEGREE,
    SOLAR_NOON_MINUTES, SUNRISE_ZENITH_DEG, SUNRISE_ZENITH_RAD,
};

pub use error::{Error, Result};

pub use location::Location;

pub use sunrise::{compute_sunrise_sunset, format_hhmm, solar_geometry, sunrise_sunset_for};

pub use types::{
    ObservationRequest, PolarCondition, SolarGeometry, SunriseSunset, MAX_UTC_OFFSET_HOURS,
    MIN_UTC_OFFSET_HOURS,
};
