use crate::logging::logging_middleware;
use crate::modules::timetable::router::init_timetable_router;
use crate::state::AppState;
use axum::{Router, middleware};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_timetable_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
