use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error};

use crate::{
    matrix_request::MatrixRequest,
    matrix_response::{CostMatrix, MatrixMetric, MatrixResponse, MatrixShapeError},
};

#[derive(Debug, Error)]
pub enum ValhallaError {
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error(transparent)]
    MatrixShape(#[from] MatrixShapeError),
}

impl From<reqwest::Error> for ValhallaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ValhallaError::Timeout
        } else {
            ValhallaError::Request(err)
        }
    }
}

pub struct ValhallaMatrixClientParams {
    pub base_url: String,
    /// Deadline for the whole exchange, body included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ValhallaMatrixClientParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VALHALLA_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
        }
    }
}

pub const DEFAULT_VALHALLA_URL: &str = "http://localhost:8002";
pub const VALHALLA_MATRIX_API_PATH: &str = "/sources_to_targets";

pub struct ValhallaMatrixClient {
    params: ValhallaMatrixClientParams,
    client: reqwest::Client,
}

impl ValhallaMatrixClient {
    pub fn new(params: ValhallaMatrixClientParams) -> Result<Self, ValhallaError> {
        let client = reqwest::Client::builder()
            .connect_timeout(params.connect_timeout)
            .timeout(params.timeout)
            .build()
            .map_err(ValhallaError::Request)?;

        Ok(Self { params, client })
    }

    pub fn base_url(&self) -> &str {
        &self.params.base_url
    }

    /// Fetches the matrix for `request`. Rows of the returned matrix are
    /// waypoints (Valhalla sources), columns are trees (Valhalla targets).
    pub async fn fetch_matrix(
        &self,
        request: &MatrixRequest,
        metric: MatrixMetric,
    ) -> Result<CostMatrix, ValhallaError> {
        match tokio::time::timeout(self.params.timeout, self.send(request, metric)).await {
            Ok(result) => result,
            Err(_) => Err(ValhallaError::Timeout),
        }
    }

    async fn send(
        &self,
        request: &MatrixRequest,
        metric: MatrixMetric,
    ) -> Result<CostMatrix, ValhallaError> {
        let json = serde_json::to_string(request)?;

        let mut url = self.params.base_url.trim_end_matches('/').to_string();
        url.push_str(VALHALLA_MATRIX_API_PATH);

        debug!(
            "Valhalla: requesting {}x{} matrix with costing {}",
            request.num_waypoints(),
            request.num_trees(),
            request.costing
        );

        let response = self
            .client
            .post(url)
            .query(&[("json", json)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => {
                    error!(
                        status_code = status.as_u16(),
                        body = %body,
                        "error response status not ok"
                    );
                    body
                }
                Err(err) => {
                    error!(
                        status_code = status.as_u16(),
                        body = "error body parsing",
                        error = %err,
                        "error response status not ok"
                    );
                    String::new()
                }
            };

            return Err(ValhallaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let matrix_response: MatrixResponse = serde_json::from_slice(&bytes)?;

        Ok(matrix_response.into_cost_matrix(
            metric,
            request.num_waypoints(),
            request.num_trees(),
        )?)
    }
}
