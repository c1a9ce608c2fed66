use serde::{Deserialize, Serialize};

/// A WGS84 coordinate. Serialized as `{ "lat": .., "lng": .. }`.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(point: GeoPoint) -> Self {
        (&point).into()
    }
}
