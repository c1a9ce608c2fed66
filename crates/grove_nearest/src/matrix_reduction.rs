use grove_valhalla::matrix_response::CostMatrix;

use crate::{geo_point::GeoPoint, match_request::MatchResult};

/// Reduces a waypoint-by-tree cost matrix to one match per tree.
///
/// Rows are waypoints and columns are trees, the layout Valhalla returns for
/// a request built with `MatrixRequest::new`. Unreachable and NaN cells never
/// win, the earliest waypoint wins ties.
pub fn reduce_cost_matrix(
    matrix: &CostMatrix,
    trees: &[GeoPoint],
    waypoints: &[GeoPoint],
) -> Vec<MatchResult> {
    trees
        .iter()
        .enumerate()
        .map(|(tree_index, tree)| {
            let mut best_cost = f64::INFINITY;
            let mut best_waypoint = None;

            for (waypoint_index, waypoint) in waypoints.iter().enumerate() {
                if let Some(cost) = matrix.cost(waypoint_index, tree_index)
                    && cost < best_cost
                {
                    best_cost = cost;
                    best_waypoint = Some(*waypoint);
                }
            }

            MatchResult {
                tree: *tree,
                nearest: best_waypoint,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FLENSBURG_HARBOUR, offset};

    #[test]
    fn test_read_columns_per_tree() {
        let trees = [FLENSBURG_HARBOUR, offset(FLENSBURG_HARBOUR, 0.1)];
        let waypoints = [offset(FLENSBURG_HARBOUR, 0.2), offset(FLENSBURG_HARBOUR, 0.3)];

        // waypoint 0 is cheaper for tree 0, waypoint 1 for tree 1
        let matrix = CostMatrix::from_rows(
            vec![vec![Some(1.0), Some(9.0)], vec![Some(5.0), Some(2.0)]],
            2,
            2,
        )
        .unwrap();

        let results = reduce_cost_matrix(&matrix, &trees, &waypoints);

        assert_eq!(results[0].nearest, Some(waypoints[0]));
        assert_eq!(results[1].nearest, Some(waypoints[1]));
        assert_eq!(results[1].tree, trees[1]);
    }

    #[test]
    fn test_skip_unreachable_waypoints() {
        let trees = [FLENSBURG_HARBOUR];
        let waypoints = [offset(FLENSBURG_HARBOUR, 0.2), offset(FLENSBURG_HARBOUR, 0.3)];
        let matrix = CostMatrix::from_rows(vec![vec![None], vec![Some(7.0)]], 2, 1).unwrap();

        let results = reduce_cost_matrix(&matrix, &trees, &waypoints);

        assert_eq!(results[0].nearest, Some(waypoints[1]));
    }

    #[test]
    fn test_leave_unmatched_when_nothing_reachable() {
        let trees = [FLENSBURG_HARBOUR];
        let waypoints = [offset(FLENSBURG_HARBOUR, 0.2)];
        let matrix = CostMatrix::unreachable(1, 1);

        let results = reduce_cost_matrix(&matrix, &trees, &waypoints);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nearest, None);
    }

    #[test]
    fn test_prefer_first_waypoint_on_tie() {
        let trees = [FLENSBURG_HARBOUR];
        let waypoints = [offset(FLENSBURG_HARBOUR, 0.2), offset(FLENSBURG_HARBOUR, 0.3)];
        let matrix = CostMatrix::from_rows(vec![vec![Some(3.0)], vec![Some(3.0)]], 2, 1).unwrap();

        let results = reduce_cost_matrix(&matrix, &trees, &waypoints);

        assert_eq!(results[0].nearest, Some(waypoints[0]));
    }
}
