use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        let coords = Coordinates { lat, lng };
        coords.validate()?;
        Ok(coords)
    }

    /// Check the latitude/longitude ranges. Fields are public, so values built
    /// without [`Coordinates::new`] are re-checked before any geodesic math.
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                self.lat
            ));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                self.lng
            ));
        }
        Ok(())
    }

    /// Geodesic distance on the WGS-84 ellipsoid, in kilometers
    pub fn geodesic_distance_km(&self, other: &Coordinates) -> f64 {
        Geodesic.distance(self.to_point(), other.to_point()) / 1000.0
    }

    /// `geo` points are (x = longitude, y = latitude)
    fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// Plain positional degrees, at most 7 decimals (~1 cm), trailing zeros
/// trimmed but always one fractional digit: `35.0`, `139.7671`, `0.00005`.
/// Never scientific notation, which Google does not accept as a coordinate.
fn format_degrees(value: f64) -> String {
    let fixed = format!("{:.7}", value);
    let trimmed = fixed.trim_end_matches('0');
    let mut out = if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    };
    // Sub-precision negatives round to "-0.0"
    if out == "-0.0" {
        out = "0.0".to_string();
    }
    out
}

/// Formats as `lat,lng`, the pair syntax Google Maps expects in query strings.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_degrees(self.lat), format_degrees(self.lng))
    }
}
