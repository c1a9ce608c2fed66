use grove_valhalla::{
    client::{ValhallaError, ValhallaMatrixClient},
    costing::ValhallaCosting,
    matrix_request::MatrixRequest,
    matrix_response::MatrixMetric,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    match_request::{MatchRequest, MatchResult},
    matrix_reduction::reduce_cost_matrix,
    nearest::nearest_local,
};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Routing engine unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Routing engine timed out")]
    UpstreamTimeout,

    #[error("Routing engine rejected the request: {status} - {message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("Routing engine returned an invalid matrix: {0}")]
    UpstreamMalformed(String),

    #[error("Local nearest search failed: {0}")]
    LocalSearch(String),
}

impl From<ValhallaError> for ResolveError {
    fn from(error: ValhallaError) -> Self {
        match error {
            ValhallaError::Request(err) => ResolveError::UpstreamUnavailable(err.to_string()),
            ValhallaError::Timeout => ResolveError::UpstreamTimeout,
            ValhallaError::Api { status, message } => {
                ResolveError::UpstreamRejected { status, message }
            }
            ValhallaError::Deserialize(err) => ResolveError::UpstreamMalformed(err.to_string()),
            ValhallaError::MatrixShape(err) => ResolveError::UpstreamMalformed(err.to_string()),
        }
    }
}

/// How the cost between a tree and a waypoint is measured.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    GreatCircle,
    ValhallaMatrix {
        costing: ValhallaCosting,
        metric: MatrixMetric,
    },
}

/// Resolves the nearest waypoint of every tree. Every strategy returns one
/// result per tree, in tree order.
pub struct NearestWaypointResolver {
    valhalla_client: ValhallaMatrixClient,
}

impl NearestWaypointResolver {
    pub fn new(valhalla_client: ValhallaMatrixClient) -> Self {
        Self { valhalla_client }
    }

    pub async fn nearest_waypoints(
        &self,
        request: &MatchRequest,
        strategy: MatchStrategy,
    ) -> Result<Vec<MatchResult>, ResolveError> {
        if let Some(reason) = request.find_non_finite() {
            return Err(ResolveError::MalformedInput(reason));
        }

        debug!(
            "Resolving {} trees against {} waypoints with {:?}",
            request.trees.len(),
            request.waypoints.len(),
            strategy
        );

        match strategy {
            MatchStrategy::GreatCircle => self.resolve_locally(request).await,
            MatchStrategy::ValhallaMatrix { costing, metric } => {
                self.resolve_via_matrix(request, costing, metric).await
            }
        }
    }

    /// The scan is CPU bound, it runs on the blocking pool so the async
    /// workers keep serving other requests meanwhile.
    async fn resolve_locally(
        &self,
        request: &MatchRequest,
    ) -> Result<Vec<MatchResult>, ResolveError> {
        let trees = request.trees.clone();
        let waypoints = request.waypoints.clone();

        tokio::task::spawn_blocking(move || nearest_local(&trees, &waypoints))
            .await
            .map_err(|err| ResolveError::LocalSearch(err.to_string()))
    }

    async fn resolve_via_matrix(
        &self,
        request: &MatchRequest,
        costing: ValhallaCosting,
        metric: MatrixMetric,
    ) -> Result<Vec<MatchResult>, ResolveError> {
        // Valhalla rejects empty location lists, the answer is known anyway
        if request.trees.is_empty() || request.waypoints.is_empty() {
            return Ok(request
                .trees
                .iter()
                .map(|tree| MatchResult {
                    tree: *tree,
                    nearest: None,
                })
                .collect());
        }

        let matrix_request = MatrixRequest::new(&request.trees, &request.waypoints, costing);

        let matrix = self
            .valhalla_client
            .fetch_matrix(&matrix_request, metric)
            .await
            .inspect_err(|err| {
                warn!(
                    base_url = self.valhalla_client.base_url(),
                    "Valhalla matrix request failed: {}", err
                )
            })?;

        Ok(reduce_cost_matrix(&matrix, &request.trees, &request.waypoints))
    }
}
