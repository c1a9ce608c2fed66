use std::f64::consts::PI;

use crate::geo_point::GeoPoint;

const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;
const KILOMETERS_PER_STATUTE_MILE: f64 = 1.609344;

/// Great-circle distance in kilometers, spherical law of cosines.
///
/// The cosine argument is clamped to 1 so that near-identical points yield 0
/// instead of NaN. There is no clamp at -1, antipodal pairs may produce NaN.
pub fn great_circle_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    // sin² + cos² may round just below 1
    if from == to {
        return 0.0;
    }

    let radlat1 = PI * from.lat / 180.0;
    let radlat2 = PI * to.lat / 180.0;
    let radtheta = PI * (from.lng - to.lng) / 180.0;

    let cos_arg =
        radlat1.sin() * radlat2.sin() + radlat1.cos() * radlat2.cos() * radtheta.cos();
    let cos_arg = cos_arg.min(1.0);

    let degrees = cos_arg.acos() * 180.0 / PI;

    degrees
        * NAUTICAL_MILES_PER_DEGREE
        * STATUTE_MILES_PER_NAUTICAL_MILE
        * KILOMETERS_PER_STATUTE_MILE
}
