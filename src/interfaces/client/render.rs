//! Result rendering

use colored::Colorize;

use crate::upstream::GeoResult;

/// Format a lookup result as a text block for the terminal.
pub fn render_result(result: &GeoResult) -> String {
    format!(
        "  {}:   {}\n  {}:     {}, {}\n  {}:  {}, {}\n  {}: {}\n  {}:          {}\n  {}:     {}",
        "IP Address".cyan(),
        result.ip,
        "Location".cyan(),
        result.city,
        result.country,
        "Coordinates".cyan(),
        result.latitude,
        result.longitude,
        "Country Code".cyan(),
        result.country_code,
        "ASN".cyan(),
        result.asn,
        "Timezone".cyan(),
        result.timezone,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeoResult {
        GeoResult {
            ip: "8.8.8.8".to_string(),
            country: "United States".to_string(),
            country_code: "US".to_string(),
            latitude: 37.751,
            longitude: -97.822,
            city: "Unknown".to_string(),
            asn: "15169 (GOOGLE)".to_string(),
            timezone: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_render_contains_exact_values() {
        colored::control::set_override(false);
        let text = render_result(&sample());
        assert!(text.contains("8.8.8.8"), "got: {}", text);
        assert!(text.contains("United States"), "got: {}", text);
        assert!(text.contains("US"), "got: {}", text);
        assert!(text.contains("37.751, -97.822"), "got: {}", text);
        assert!(text.contains("15169 (GOOGLE)"), "got: {}", text);
        colored::control::unset_override();
    }

    #[test]
    fn test_render_shows_sentinel_city_and_timezone() {
        colored::control::set_override(false);
        let text = render_result(&sample());
        assert!(text.contains("Unknown, United States"), "got: {}", text);
        assert!(text.contains("Timezone"), "got: {}", text);
        colored::control::unset_override();
    }
}
