use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use grove_nearest::geo_point::GeoPoint;
use serde::Serialize;

pub const START_POINT: GeoPoint = GeoPoint::new(54.76800589462181, 9.432455715803746);
pub const END_POINT: GeoPoint = GeoPoint::new(54.76950271898897, 9.436204955830489);
pub const WATERING_POINTS: [GeoPoint; 2] = [
    GeoPoint::new(54.768557846288275, 9.434116547866934),
    GeoPoint::new(54.80539072138063, 9.449963237272696),
];

#[derive(Serialize)]
pub struct DefaultsResponse {
    start: GeoPoint,
    end: GeoPoint,
    wp: &'static [GeoPoint],
}

impl IntoResponse for DefaultsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn defaults_handler() -> DefaultsResponse {
    DefaultsResponse {
        start: START_POINT,
        end: END_POINT,
        wp: &WATERING_POINTS,
    }
}
