#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMode {
    Metric,
    Imperial,
}

pub const MPH_PER_KMH: f64 = 0.621_371_192_237_334;

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Rounds to a whole degree, then converts. Presentation doesn't care about
/// tenths of a degree, and rounding in Celsius first keeps the displayed
/// values consistent with already-rounded stored temperatures.
#[must_use]
pub fn format_temperature(celsius: f64, mode: UnitMode) -> String {
    let rounded = round_half_up(celsius);
    match mode {
        UnitMode::Metric => format!("{rounded:.0}°C"),
        UnitMode::Imperial => format!("{:.0}°F", celsius_to_fahrenheit(rounded)),
    }
}

/// "HIGH / LOW" with each side rounded independently.
#[must_use]
pub fn format_high_low(high_celsius: f64, low_celsius: f64, mode: UnitMode) -> String {
    format!(
        "{} / {}",
        format_temperature(high_celsius, mode),
        format_temperature(low_celsius, mode)
    )
}

/// "2 km/h SW" / "1 mph SW" style wind summary.
#[must_use]
pub fn format_wind(speed_kmh: f64, degrees: f64, mode: UnitMode) -> String {
    let direction = compass_direction(degrees);
    match mode {
        UnitMode::Metric => format!("{speed_kmh:.0} km/h {direction}"),
        UnitMode::Imperial => format!("{:.0} mph {direction}", speed_kmh * MPH_PER_KMH),
    }
}

/// Eight 45-degree sectors centered on the compass points; the north sector
/// wraps around zero. Degrees outside [0, 360) resolve to "Unknown".
#[must_use]
pub fn compass_direction(degrees: f64) -> &'static str {
    if !(0.0..360.0).contains(&degrees) {
        return "Unknown";
    }
    match degrees {
        d if d < 22.5 || d >= 337.5 => "N",
        d if d < 67.5 => "NE",
        d if d < 112.5 => "E",
        d if d < 157.5 => "SE",
        d if d < 202.5 => "S",
        d if d < 247.5 => "SW",
        d if d < 292.5 => "W",
        _ => "NW",
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion_anchors() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn temperature_rounds_before_converting() {
        assert_eq!(format_temperature(24.6, UnitMode::Metric), "25°C");
        assert_eq!(format_temperature(24.6, UnitMode::Imperial), "77°F");
        assert_eq!(format_temperature(-0.4, UnitMode::Metric), "0°C");
        assert_eq!(format_temperature(20.5, UnitMode::Metric), "21°C");
    }

    #[test]
    fn high_low_rounds_each_side_independently() {
        assert_eq!(format_high_low(25.0, 10.0, UnitMode::Metric), "25°C / 10°C");
        assert_eq!(
            format_high_low(24.5, 9.5, UnitMode::Imperial),
            "77°F / 50°F"
        );
    }

    #[test]
    fn wind_formatting_per_unit_mode() {
        assert_eq!(format_wind(10.0, 0.0, UnitMode::Metric), "10 km/h N");
        assert_eq!(format_wind(20.0, 220.0, UnitMode::Imperial), "12 mph SW");
    }

    #[test]
    fn compass_sector_boundaries() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(359.9), "N");
        assert_eq!(compass_direction(45.0), "NE");
        assert_eq!(compass_direction(200.0), "S");
        assert_eq!(compass_direction(202.5), "SW");
        assert_eq!(compass_direction(337.5), "N");
        assert_eq!(compass_direction(292.5), "NW");
    }

    #[test]
    fn out_of_range_degrees_are_unknown() {
        assert_eq!(compass_direction(-5.0), "Unknown");
        assert_eq!(compass_direction(360.0), "Unknown");
        assert_eq!(compass_direction(f64::NAN), "Unknown");
    }
}
