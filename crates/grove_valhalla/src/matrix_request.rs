use serde::Serialize;

use crate::costing::ValhallaCosting;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ValhallaPoint {
    pub lat: f64,
    pub lon: f64,
}

impl<P> From<&P> for ValhallaPoint
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    fn from(point: &P) -> Self {
        let point: geo_types::Point = point.into();
        ValhallaPoint {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

/// Body of a `sources_to_targets` request.
///
/// Valhalla's sources are our waypoints and its targets are our trees: every
/// tree wants the cheapest waypoint, so the matrix is read per target column
/// across the source rows.
#[derive(Serialize, Debug, Clone)]
pub struct MatrixRequest {
    pub sources: Vec<ValhallaPoint>,
    pub targets: Vec<ValhallaPoint>,
    pub costing: ValhallaCosting,
}

impl MatrixRequest {
    pub fn new<P>(trees: &[P], waypoints: &[P], costing: ValhallaCosting) -> Self
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        MatrixRequest {
            sources: waypoints.iter().map(ValhallaPoint::from).collect(),
            targets: trees.iter().map(ValhallaPoint::from).collect(),
            costing,
        }
    }

    pub fn num_waypoints(&self) -> usize {
        self.sources.len()
    }

    pub fn num_trees(&self) -> usize {
        self.targets.len()
    }
}
