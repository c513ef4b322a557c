use collatz_dash::http::{create_router, AppState};
use collatz_dash::models::ParamLimits;

/// Router with small limits so tests stay fast.
pub fn test_router() -> axum::Router {
    create_router(AppState::new(ParamLimits {
        max_trajectories: 100,
        max_start_limit: 10_000_000,
    }))
}
