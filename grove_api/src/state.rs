use grove_nearest::resolver::{MatchStrategy, NearestWaypointResolver};

pub struct AppState {
    pub resolver: NearestWaypointResolver,
    /// Strategy used by `/v2/nearest`
    pub matrix_strategy: MatchStrategy,
}
