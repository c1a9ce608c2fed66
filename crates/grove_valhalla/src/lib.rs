pub mod client;
pub mod costing;
pub mod matrix_request;
pub mod matrix_response;
