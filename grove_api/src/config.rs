use std::{net::SocketAddr, path::PathBuf, time::Duration};

use clap::Parser;
use grove_nearest::resolver::MatchStrategy;
use grove_valhalla::{
    client::{DEFAULT_VALHALLA_URL, ValhallaMatrixClientParams},
    costing::ValhallaCosting,
    matrix_response::MatrixMetric,
};

/// Every option can also be set through its environment variable or `.env.local`.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// Address the HTTP server listens on
    #[arg(long, env = "GROVE_BIND", default_value = "0.0.0.0:1123")]
    pub bind: SocketAddr,

    /// Base URL of the Valhalla routing engine
    #[arg(long, env = "VALHALLA_URL", default_value = DEFAULT_VALHALLA_URL)]
    pub valhalla_url: String,

    /// Valhalla costing model used by /v2/nearest (auto, bicycle, pedestrian, ...)
    #[arg(long, env = "VALHALLA_COSTING", default_value_t = ValhallaCosting::Auto)]
    pub costing: ValhallaCosting,

    /// Matrix annotation used as the cost (distance or time)
    #[arg(long, env = "VALHALLA_METRIC", default_value_t = MatrixMetric::Distance)]
    pub metric: MatrixMetric,

    /// Deadline for a single Valhalla request, in milliseconds
    #[arg(long, env = "VALHALLA_TIMEOUT_MS", default_value_t = 10_000)]
    pub upstream_timeout_ms: u64,

    /// Directory served for every unmatched GET path
    #[arg(long, env = "GROVE_UI_DIR", default_value = "./ui")]
    pub ui_dir: PathBuf,

    #[arg(short, long)]
    pub debug: bool,
}

impl ServerArgs {
    pub fn valhalla_params(&self) -> ValhallaMatrixClientParams {
        let timeout = Duration::from_millis(self.upstream_timeout_ms);
        ValhallaMatrixClientParams {
            base_url: self.valhalla_url.clone(),
            timeout,
            connect_timeout: timeout.min(Duration::from_secs(3)),
        }
    }

    pub fn matrix_strategy(&self) -> MatchStrategy {
        MatchStrategy::ValhallaMatrix {
            costing: self.costing,
            metric: self.metric,
        }
    }
}
