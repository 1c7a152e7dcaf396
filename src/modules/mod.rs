pub mod timetable;

pub use self::timetable::model::CourseSession;
