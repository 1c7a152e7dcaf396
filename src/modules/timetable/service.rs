use sqlx::PgPool;
use tracing::instrument;

use crate::modules::timetable::model::CourseSession;
use crate::utils::errors::AppError;

pub struct TimetableService;

impl TimetableService {
    /// All sessions scheduled for one level, in storage order.
    #[instrument]
    pub async fn sessions_by_level(
        db: &PgPool,
        level: i32,
    ) -> Result<Vec<CourseSession>, AppError> {
        let sessions = sqlx::query_as::<_, CourseSession>(
            r#"SELECT course_name, day, time, room, level
               FROM timetable
               WHERE level = $1"#,
        )
        .bind(level)
        .fetch_all(db)
        .await?;

        Ok(sessions)
    }

    /// Distinct set of levels present in the timetable, ordered so the
    /// selector stays stable across requests.
    #[instrument]
    pub async fn distinct_levels(db: &PgPool) -> Result<Vec<i32>, AppError> {
        let levels =
            sqlx::query_scalar::<_, i32>("SELECT DISTINCT level FROM timetable ORDER BY level")
                .fetch_all(db)
                .await?;

        Ok(levels)
    }
}
