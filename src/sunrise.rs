use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use log::debug;

use crate::angles;
use crate::error::{Error, Result};
use crate::types::{ObservationRequest, PolarCondition, SolarGeometry, SunriseSunset};

pub fn solar_geometry(request: &ObservationRequest) -> SolarGeometry {
    let n = angles::day_of_year(request.date());
    let gamma = angles::fractional_year(request.year(), n, request.hour());
    let eot = angles::equation_of_time(gamma);
    let decl = angles::solar_declination(gamma);
    let offset = angles::time_offset(eot, request.longitude(), request.utc_offset_hours());
    let tst = angles::true_solar_time(request.hour(), request.minute(), request.second(), offset);
    SolarGeometry {
        day_of_year: n,
        fractional_year: gamma,
        equation_of_time: eot,
        declination: decl,
        time_offset: offset,
        true_solar_time: tst,
        hour_angle: angles::hour_angle(tst),
    }
}

fn polar_condition(cos_hour_angle: f64) -> PolarCondition {
    if cos_hour_angle < -1.0 {
        PolarCondition::PolarDay
    } else {
        PolarCondition::PolarNight
    }
}

/// Local midnight of `date`, shifted by the offset and then by the UTC
/// minutes-from-midnight of the event.
fn local_timestamp(
    date: NaiveDate,
    utc_offset_hours: i32,
    minutes_utc: f64,
) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or(Error::InvalidUtcOffset {
        seconds: utc_offset_hours.saturating_mul(3600),
    })?;
    let shift = Duration::hours(utc_offset_hours as i64)
        + Duration::milliseconds((minutes_utc * 60_000.0).round() as i64);
    let local = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(shift)
        .ok_or(Error::TimestampOutOfRange)?;
    offset
        .from_local_datetime(&local)
        .single()
        .ok_or(Error::TimestampOutOfRange)
}

/// Sunrise and sunset on the request's date, in the request's UTC offset.
///
/// Fails with [`Error::NoSunriseSunset`] when the sun stays above or below
/// the 90.833° zenith all day.
pub fn compute_sunrise_sunset(request: &ObservationRequest) -> Result<SunriseSunset> {
    let geo = solar_geometry(request);
    let cos_ha = angles::cos_sunrise_hour_angle(request.latitude(), geo.declination);
    let ha_rise = angles::sunrise_hour_angle(cos_ha).ok_or(
        Error::NoSunriseSunset {
            condition: polar_condition(cos_ha),
            cos_hour_angle: cos_ha,
        },
    )?;
    let ha_set = -ha_rise;

    let rise_minutes = angles::event_minutes_utc(request.longitude(), ha_rise, geo.equation_of_time);
    let set_minutes = angles::event_minutes_utc(request.longitude(), ha_set, geo.equation_of_time);
    debug!(
        "{}: day {} gamma={:.6} eot={:.3}min decl={:.6}rad ha_rise={:.4}° rise={:.2}min set={:.2}min (UTC)",
        request.date(),
        geo.day_of_year,
        geo.fractional_year,
        geo.equation_of_time,
        geo.declination,
        ha_rise,
        rise_minutes,
        set_minutes
    );

    Ok(SunriseSunset {
        sunrise: local_timestamp(request.date(), request.utc_offset_hours(), rise_minutes)?,
        sunset: local_timestamp(request.date(), request.utc_offset_hours(), set_minutes)?,
        sunrise_hour_angle: ha_rise,
    })
}

/// Sunrise and sunset for the local date of a zoned timestamp.
pub fn sunrise_sunset_for<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseSunset> {
    compute_sunrise_sunset(&ObservationRequest::from_datetime(dt, latitude, longitude)?)
}

pub fn format_hhmm<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}
