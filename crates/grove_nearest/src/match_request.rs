use serde::Deserialize;

use crate::geo_point::GeoPoint;

/// Trees to resolve and the candidate waypoints they may be matched to.
/// The order of `trees` is the order of the results.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub trees: Vec<GeoPoint>,

    #[serde(default, rename = "wp")]
    pub waypoints: Vec<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub tree: GeoPoint,
    /// `None` when no waypoint could be matched.
    pub nearest: Option<GeoPoint>,
}

impl MatchRequest {
    pub fn new(trees: Vec<GeoPoint>, waypoints: Vec<GeoPoint>) -> Self {
        MatchRequest { trees, waypoints }
    }

    /// Returns a description of the first point with a NaN or infinite coordinate.
    pub fn find_non_finite(&self) -> Option<String> {
        let tree = self
            .trees
            .iter()
            .position(|point| !point.is_finite())
            .map(|i| format!("tree {i} has a non-finite coordinate"));

        tree.or_else(|| {
            self.waypoints
                .iter()
                .position(|point| !point.is_finite())
                .map(|i| format!("waypoint {i} has a non-finite coordinate"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_domain_field_names() {
        let request: MatchRequest = serde_json::from_str(
            r#"{"trees": [{"lat": 1.0, "lng": 2.0}], "wp": [{"lat": 3.0, "lng": 4.0}]}"#,
        )
        .unwrap();

        assert_eq!(request.trees, vec![GeoPoint::new(1.0, 2.0)]);
        assert_eq!(request.waypoints, vec![GeoPoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_default_missing_lists() {
        let request: MatchRequest = serde_json::from_str("{}").unwrap();

        assert!(request.trees.is_empty());
        assert!(request.waypoints.is_empty());
    }

    #[test]
    fn test_find_non_finite_waypoint() {
        let request = MatchRequest::new(
            vec![GeoPoint::new(1.0, 2.0)],
            vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(f64::NAN, 2.0)],
        );

        assert_eq!(
            request.find_non_finite().as_deref(),
            Some("waypoint 1 has a non-finite coordinate")
        );
    }
}
