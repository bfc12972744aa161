use std::f64::consts::PI;

use chrono::{NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use solar_clock::{
    compute_sunrise_sunset, equation_of_time, leap_year, solar_declination, solar_geometry,
    ObservationRequest,
};

/// Latitudes where the sun rises and sets every day of the year.
fn temperate_latitude_strategy() -> impl Strategy<Value = f64> {
    -60.0..=60.0
}

fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Whole-hour zone offset nearest to the longitude's solar meridian.
fn offset_for(longitude: f64) -> i32 {
    ((longitude / 15.0).round() as i32).clamp(-12, 12)
}

proptest! {
    #[test]
    fn test_sunrise_before_sunset_same_day(
        lat in temperate_latitude_strategy(),
        lon in longitude_strategy(),
        year in 1900..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        hour in 0..24u32,
    ) {
        let req = ObservationRequest::from_parts(year, month, day, hour, 0, 0, offset_for(lon), lat, lon)
            .unwrap();
        let times = compute_sunrise_sunset(&req).unwrap();
        prop_assert!(times.sunrise < times.sunset, "{:?}", times);
        prop_assert_eq!(times.sunrise.date_naive(), req.date());
        prop_assert_eq!(times.sunset.date_naive(), req.date());
    }

    #[test]
    fn test_sunrise_sunset_symmetric_about_solar_noon(
        lat in temperate_latitude_strategy(),
        lon in longitude_strategy(),
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let offset = offset_for(lon);
        let req = ObservationRequest::from_parts(2024, month, day, 12, 0, 0, offset, lat, lon)
            .unwrap();
        let times = compute_sunrise_sunset(&req).unwrap();
        let eot = solar_geometry(&req).equation_of_time;
        let midnight = req.date().and_time(NaiveTime::MIN);
        let minutes = |t: NaiveDateTime| (t - midnight).num_milliseconds() as f64 / 60_000.0;
        let rise = minutes(times.sunrise.naive_local());
        let set = minutes(times.sunset.naive_local());
        let noon = 720.0 - 4.0 * lon - eot + 60.0 * offset as f64;
        prop_assert!(((rise + set) / 2.0 - noon).abs() < 0.001, "rise={} set={} noon={}", rise, set, noon);
        prop_assert!(((set - rise) - 8.0 * times.sunrise_hour_angle).abs() < 0.001);
    }

    #[test]
    fn test_polynomials_periodic_in_gamma(gamma in 0.0..(2.0 * PI)) {
        prop_assert!((equation_of_time(gamma) - equation_of_time(gamma + 2.0 * PI)).abs() < 1e-9);
        prop_assert!((solar_declination(gamma) - solar_declination(gamma + 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_leap_year_rule(year in -4000..4000i32) {
        let expected = year % 400 == 0 || (year % 4 == 0 && year % 100 != 0);
        prop_assert_eq!(leap_year(year), expected);
    }

    #[test]
    fn test_result_independent_of_clock_minutes(
        lat in temperate_latitude_strategy(),
        lon in longitude_strategy(),
        hour in 0..24u32,
        minute in 0..60u32,
        second in 0..60u32,
    ) {
        let offset = offset_for(lon);
        let on_hour = ObservationRequest::from_parts(2025, 5, 10, hour, 0, 0, offset, lat, lon).unwrap();
        let later = ObservationRequest::from_parts(2025, 5, 10, hour, minute, second, offset, lat, lon).unwrap();
        prop_assert_eq!(
            compute_sunrise_sunset(&on_hour).unwrap(),
            compute_sunrise_sunset(&later).unwrap()
        );
    }
}
