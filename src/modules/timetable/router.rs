use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::index;

pub fn init_timetable_router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
