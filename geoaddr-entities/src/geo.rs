use std::str::FromStr;

use thiserror::Error;

/// The mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position given as latitude/longitude degrees.
///
/// Coordinates are deliberately not range-checked. Records may carry
/// out-of-range values and the distance calculation has to cope with
/// whatever is stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
#[error("Failed to parse map point: {0}")]
pub struct MapPointParseError(String);

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => {
                match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
                    (Ok(lat), Ok(lng)) => Ok(MapPoint::new(lat, lng)),
                    _ => Err(MapPointParseError(s.to_string())),
                }
            }
            _ => Err(MapPointParseError(s.to_string())),
        }
    }
}

/// Great-circle distance in kilometers between two points
/// on the surface of the earth (Haversine formula).
///
/// Symmetric and zero for coincident points. NaN or infinite
/// coordinates propagate into the result.
pub fn distance_km(a: MapPoint, b: MapPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    // Rounding can push h marginally outside [0, 1] for antipodal or
    // pole-adjacent points, which would make one of the square roots NaN.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
