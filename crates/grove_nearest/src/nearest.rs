use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{geo_point::GeoPoint, great_circle::great_circle_distance, match_request::MatchResult};

/// Index of the waypoint closest to `tree`. The first waypoint reaching the
/// minimum wins. Distances that are NaN never win.
pub fn nearest_waypoint_index(tree: &GeoPoint, waypoints: &[GeoPoint]) -> Option<usize> {
    let mut best_distance = f64::INFINITY;
    let mut best_index = None;

    for (i, waypoint) in waypoints.iter().enumerate() {
        let distance = great_circle_distance(tree, waypoint);
        trace!("distance from {:?} to {:?} is {}", tree, waypoint, distance);

        if distance < best_distance {
            debug!("old distance: {}, new distance: {}", best_distance, distance);
            best_distance = distance;
            best_index = Some(i);
        }
    }

    best_index
}

/// Matches every tree to its nearest waypoint by great-circle distance.
/// One result per tree, in tree order.
pub fn nearest_local(trees: &[GeoPoint], waypoints: &[GeoPoint]) -> Vec<MatchResult> {
    trees
        .par_iter()
        .map(|tree| MatchResult {
            tree: *tree,
            nearest: nearest_waypoint_index(tree, waypoints).map(|i| waypoints[i]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FLENSBURG_HARBOUR, FLENSBURG_NORTH, offset};

    #[test]
    fn test_match_identical_waypoint() {
        let results = nearest_local(&[FLENSBURG_HARBOUR], &[FLENSBURG_HARBOUR, FLENSBURG_NORTH]);

        assert_eq!(
            results,
            vec![MatchResult {
                tree: FLENSBURG_HARBOUR,
                nearest: Some(FLENSBURG_HARBOUR),
            }]
        );
    }

    #[test]
    fn test_pick_literal_minimum() {
        let tree = FLENSBURG_HARBOUR;
        let waypoints = vec![offset(tree, 0.05), offset(tree, 0.01), offset(tree, 0.03)];

        let results = nearest_local(&[tree], &waypoints);

        let expected = waypoints
            .iter()
            .min_by(|a, b| {
                great_circle_distance(&tree, a)
                    .partial_cmp(&great_circle_distance(&tree, b))
                    .unwrap()
            })
            .copied();
        assert_eq!(results[0].nearest, expected);
        assert_eq!(results[0].nearest, Some(waypoints[1]));
    }

    #[test]
    fn test_prefer_first_of_equal_waypoints() {
        let tree = FLENSBURG_HARBOUR;
        let waypoints = vec![offset(tree, 0.02), FLENSBURG_NORTH, offset(tree, 0.02)];

        assert_eq!(nearest_waypoint_index(&tree, &waypoints), Some(0));
    }

    #[test]
    fn test_return_empty_for_no_trees() {
        assert!(nearest_local(&[], &[FLENSBURG_NORTH]).is_empty());
    }

    #[test]
    fn test_return_no_match_without_waypoints() {
        let trees = [FLENSBURG_HARBOUR, FLENSBURG_NORTH];
        let results = nearest_local(&trees, &[]);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|result| result.nearest.is_none()));
        assert_eq!(results[1].tree, FLENSBURG_NORTH);
    }

    #[test]
    fn test_keep_tree_order() {
        let trees: Vec<GeoPoint> = (0..64)
            .map(|i| offset(FLENSBURG_HARBOUR, i as f64 * 0.001))
            .collect();
        let results = nearest_local(&trees, &[FLENSBURG_NORTH]);

        assert_eq!(results.len(), trees.len());
        for (result, tree) in results.iter().zip(&trees) {
            assert_eq!(result.tree, *tree);
        }
    }
}
