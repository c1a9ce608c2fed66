use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use grove_nearest::resolver::ResolveError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BadGateway(String),
    GatewayTimeout(String),
    InternalServerError(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ResolveError> for ApiError {
    fn from(error: ResolveError) -> Self {
        let message = error.to_string();
        match error {
            ResolveError::MalformedInput(_) => ApiError::BadRequest(message),
            // a 4xx from the engine means the coordinates we sent were unusable
            ResolveError::UpstreamRejected { status, .. } if (400..500).contains(&status) => {
                ApiError::BadRequest(message)
            }
            ResolveError::UpstreamRejected { .. }
            | ResolveError::UpstreamUnavailable(_)
            | ResolveError::UpstreamMalformed(_) => ApiError::BadGateway(message),
            ResolveError::UpstreamTimeout => ApiError::GatewayTimeout(message),
            ResolveError::LocalSearch(_) => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message).into_response(),
            ApiError::GatewayTimeout(message) => {
                (StatusCode::GATEWAY_TIMEOUT, message).into_response()
            }
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
