// Location model representing geographic coordinates in decimal degrees

use crate::utils::distance::haversine_km;
use serde::{Deserialize, Serialize};

/// Represents a point on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Creates a new location from latitude and longitude
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}

// geo uses (x, y) = (longitude, latitude)
impl From<Location> for geo::Point<f64> {
    fn from(location: Location) -> Self {
        geo::Point::new(location.lng, location.lat)
    }
}

impl From<geo::Point<f64>> for Location {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self() {
        let buenos_aires = Location::new(-34.6037, -58.3816);

        assert_eq!(buenos_aires.distance_to(&buenos_aires), 0.0);
    }

    #[test]
    fn test_geo_point_axis_order() {
        let loc = Location::new(-34.6037, -58.3816);
        let point: geo::Point<f64> = loc.into();

        assert_eq!(point.x(), -58.3816);
        assert_eq!(point.y(), -34.6037);
        assert_eq!(Location::from(point), loc);
    }

    #[test]
    fn test_serializes_flat_lat_lng() {
        let json = serde_json::to_value(Location::new(1.5, -2.5)).unwrap();

        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": -2.5 }));
    }
}
