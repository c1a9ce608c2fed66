use crate::geo_point::GeoPoint;

pub const FLENSBURG_HARBOUR: GeoPoint = GeoPoint::new(54.76849412606307, 9.434964189058697);
pub const FLENSBURG_NORTH: GeoPoint = GeoPoint::new(54.80539072138063, 9.449963237272696);

/// Moves `point` north by `degrees` of latitude.
pub fn offset(point: GeoPoint, degrees: f64) -> GeoPoint {
    GeoPoint::new(point.lat + degrees, point.lng)
}
