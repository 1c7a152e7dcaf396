use sqlx::PgPool;

/// Insert one timetable row.
pub async fn insert_session(
    pool: &PgPool,
    course_name: &str,
    day: &str,
    time: &str,
    room: &str,
    level: i32,
) {
    sqlx::query(
        "INSERT INTO timetable (course_name, day, time, room, level) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(course_name)
    .bind(day)
    .bind(time)
    .bind(room)
    .bind(level)
    .execute(pool)
    .await
    .unwrap();
}
