use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Level assumed when the request carries no usable `level` parameter.
pub const DEFAULT_LEVEL: i32 = 1000;

/// One scheduled class occurrence. Rows are created and maintained
/// outside this service; we only ever read them.
#[derive(Debug, Serialize, FromRow)]
pub struct CourseSession {
    pub course_name: String,
    pub day: String,
    pub time: String,
    pub room: String,
    pub level: i32,
}

/// Query-string shape of `GET /`.
#[derive(Debug, Deserialize)]
pub struct TimetableQuery {
    /// Raw `level` parameter. Kept as text so a non-numeric value falls
    /// back to [`DEFAULT_LEVEL`] instead of rejecting the request.
    pub level: Option<String>,
}

impl TimetableQuery {
    pub fn level_or_default(&self) -> i32 {
        self.level
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_LEVEL)
    }
}
