use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::instrument;

use crate::modules::timetable::model::TimetableQuery;
use crate::modules::timetable::service::TimetableService;
use crate::modules::timetable::view;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Renders the timetable page, filtered to the requested level.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<TimetableQuery>,
) -> Result<Html<String>, AppError> {
    let level = params.level_or_default();

    let courses = TimetableService::sessions_by_level(&state.db, level).await?;
    let levels = TimetableService::distinct_levels(&state.db).await?;

    Ok(Html(view::render_index(&courses, &levels, level)))
}
