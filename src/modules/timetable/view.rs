//! HTML rendering for the timetable page.
//!
//! The page is assembled by hand rather than through a template engine;
//! a single page with a selector and a table does not warrant one.
//! Everything that originates in storage goes through [`escape_html`]
//! on its way out.

use crate::modules::timetable::model::CourseSession;

/// Name shown in the page heading.
pub const STUDENT_NAME: &str = "Zafar Khidoyatov";

/// Escapes the five HTML metacharacters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full timetable page: level selector, course table, and
/// the static display name.
pub fn render_index(courses: &[CourseSession], levels: &[i32], selected_level: i32) -> String {
    let mut options = String::new();
    for level in levels {
        if *level == selected_level {
            options.push_str(&format!(
                "            <option value=\"{level}\" selected>{level}</option>\n"
            ));
        } else {
            options.push_str(&format!(
                "            <option value=\"{level}\">{level}</option>\n"
            ));
        }
    }

    let mut rows = String::new();
    for course in courses {
        rows.push_str(&format!(
            "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&course.course_name),
            escape_html(&course.day),
            escape_html(&course.time),
            escape_html(&course.room),
        ));
    }
    if rows.is_empty() {
        rows.push_str(&format!(
            "            <tr><td colspan=\"4\">No courses for level {selected_level}</td></tr>\n"
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Timetable</title>
</head>
<body>
    <h1>Timetable for {name}</h1>
    <form method="get" action="/">
        <label for="level">Level:</label>
        <select name="level" id="level">
{options}        </select>
        <button type="submit">Show</button>
    </form>
    <table>
        <thead>
            <tr><th>Course</th><th>Day</th><th>Time</th><th>Room</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</body>
</html>
"#,
        name = escape_html(STUDENT_NAME),
    )
}
