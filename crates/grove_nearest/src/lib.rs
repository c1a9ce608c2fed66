pub mod geo_point;
pub mod great_circle;
pub mod match_request;
pub mod matrix_reduction;
pub mod nearest;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;
