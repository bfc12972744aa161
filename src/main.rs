//! solar-clock - print today's sunrise and sunset for a place.

use std::io::Write;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use log::debug;

use solar_clock::location::{parse_timezone, Location, DEFAULT_LOCATION};
use solar_clock::{
    format_hhmm, rad_to_deg, solar_geometry, sunrise_sunset_for, Error, ObservationRequest,
};

#[derive(Parser)]
#[command(
    name = "solar-clock",
    version,
    about = "Sunrise and sunset times from the NOAA solar approximation"
)]
struct Cli {
    /// Preset location name
    #[arg(short, long, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Latitude in degrees, overrides the preset
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees, overrides the preset
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Place name to print, e.g. for custom coordinates
    #[arg(short, long)]
    name: Option<String>,

    /// IANA timezone name, overrides the preset
    #[arg(short, long)]
    timezone: Option<String>,

    /// Date as YYYY-MM-DD (default: today at the location)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Clock time as HH:MM[:SS] (default: now at the location)
    #[arg(long, value_parser = parse_clock_time)]
    time: Option<NaiveTime>,

    /// Also print the intermediate solar geometry
    #[arg(short, long)]
    verbose: bool,

    /// List preset locations and exit
    #[arg(long)]
    list: bool,
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS: {e}"))
}

fn resolve_location(cli: &Cli) -> anyhow::Result<Location> {
    let mut location = Location::preset(&cli.location)?;
    if let Some(tz) = &cli.timezone {
        location.timezone = parse_timezone(tz)?;
    }
    if cli.lat.is_some() || cli.lon.is_some() {
        location.latitude = cli.lat.unwrap_or(location.latitude);
        location.longitude = cli.lon.unwrap_or(location.longitude);
        location.name = format!("{:.4}, {:.4}", location.latitude, location.longitude);
        location.region.clear();
    }
    if let Some(name) = &cli.name {
        location.name = name.clone();
    }
    Ok(location)
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    if cli.list {
        for name in Location::preset_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let location = resolve_location(cli)?;
    let now = location.now();
    let date = cli.date.unwrap_or_else(|| now.date_naive());
    let time = cli.time.unwrap_or_else(|| now.time());
    let at = location
        .local_datetime(date, time)
        .with_context(|| format!("{date} {time} does not exist in {}", location.timezone))?;
    debug!("resolved {} to {} ({})", location.name, at, location.timezone);

    if cli.verbose {
        let request = ObservationRequest::from_datetime(&at, location.latitude, location.longitude)?;
        let geo = solar_geometry(&request);
        writeln!(out, "Day of year: {}", geo.day_of_year)?;
        writeln!(out, "Fractional year: {:.6} rad", geo.fractional_year)?;
        writeln!(out, "Equation of time: {:.2} minutes", geo.equation_of_time)?;
        writeln!(out, "Declination: {:.4}°", rad_to_deg(geo.declination))?;
        writeln!(out, "True solar time: {:.2} minutes", geo.true_solar_time)?;
        writeln!(out, "Hour angle: {:.2}°", geo.hour_angle)?;
    }

    match sunrise_sunset_for(&at, location.latitude, location.longitude) {
        Ok(times) => writeln!(
            out,
            "Sunrise and sunset time of {} in {} is {}, {}",
            date,
            location.name,
            format_hhmm(&times.sunrise),
            format_hhmm(&times.sunset)
        )?,
        Err(Error::NoSunriseSunset { condition, .. }) => writeln!(
            out,
            "No sunrise or sunset on {} in {} ({})",
            date, location.name, condition
        )?,
        Err(e) => {
            return Err(e).with_context(|| format!("calculating sunrise for {}", location.name))
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}
