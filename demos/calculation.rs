use solar_clock::{compute_sunrise_sunset, format_hhmm, rad_to_deg, solar_geometry, ObservationRequest};

fn main() -> solar_clock::Result<()> {
    let latitude = 34.2658;
    let longitude = 108.9541;

    let request = ObservationRequest::from_parts(2024, 3, 20, 12, 0, 0, 8, latitude, longitude)?;

    let geo = solar_geometry(&request);
    let times = compute_sunrise_sunset(&request)?;

    println!("=== Sunrise/Sunset Calculation Example ===");
    println!("Location: Xi'an, China ({:.4}°N, {:.4}°E)", latitude, longitude);
    println!("Date/Time: {} {} (UTC+{})", request.date(), request.time(), request.utc_offset_hours());
    println!();
    println!("--- Solar Geometry ---");
    println!("Day of year: {}", geo.day_of_year);
    println!("Fractional year: {:.4} rad", geo.fractional_year);
    println!("Equation of Time: {:.2} minutes", geo.equation_of_time);
    println!("Declination: {:.2}°", rad_to_deg(geo.declination));
    println!("True Solar Time: {:.2} minutes", geo.true_solar_time);
    println!("Hour Angle: {:.2}°", geo.hour_angle);
    println!();
    println!("--- Sunrise / Sunset ---");
    println!("Sunrise hour angle: {:.3}°", times.sunrise_hour_angle);
    println!("Sunrise: {}", format_hhmm(&times.sunrise));
    println!("Sunset: {}", format_hhmm(&times.sunset));
    println!(
        "Day length: {}h {:02}m",
        times.day_length().num_hours(),
        times.day_length().num_minutes() % 60
    );
    Ok(())
}
