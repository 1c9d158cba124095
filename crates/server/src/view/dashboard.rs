use axum::response::Html;
use shared::{
    domain::request::course::{CourseSort, CourseStatus},
    model::course::Course,
    session::FlashMessage,
};

use super::{escape_html, flash_banner, layout};

/// Edit-form prefill with the stored timestamps split back into separate
/// date and time fields.
#[derive(Debug, Default)]
pub struct EditCoursePrefill {
    pub id: i32,
    pub name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub status: String,
}

#[derive(Debug)]
pub struct DashboardPage {
    pub user_email: String,
    pub flash: Option<FlashMessage>,
    pub courses: Vec<Course>,
    pub edit: Option<EditCoursePrefill>,
    pub sort: CourseSort,
    pub status_filter: String,
}

fn selected(current: &str, option: &str) -> &'static str {
    if current == option { " selected" } else { "" }
}

fn filter_controls(page: &DashboardPage) -> String {
    let sort = page.sort.as_param();
    let status = page.status_filter.as_str();

    let mut html = String::from("<form method=\"get\" action=\"/dashboard\">\n");

    html.push_str("<label>Status <select name=\"status\">\n");
    html.push_str(&format!("<option value=\"\"{}>All</option>\n", selected(status, "")));
    for option in [CourseStatus::Active, CourseStatus::Inactive] {
        html.push_str(&format!(
            "<option value=\"{value}\"{sel}>{value}</option>\n",
            value = option.as_str(),
            sel = selected(status, option.as_str()),
        ));
    }
    html.push_str("</select></label>\n");

    html.push_str("<label>Sort <select name=\"sort\">\n");
    for (value, label) in [
        ("a_z", "Name A-Z"),
        ("z_a", "Name Z-A"),
        ("date_desc", "Newest first"),
        ("date_asc", "Oldest first"),
    ] {
        html.push_str(&format!(
            "<option value=\"{value}\"{sel}>{label}</option>\n",
            sel = selected(sort, value),
        ));
    }
    html.push_str("</select></label>\n");

    html.push_str("<button type=\"submit\">Apply</button>\n</form>\n");

    html
}

fn course_rows(courses: &[Course]) -> String {
    let mut html = String::new();

    for course in courses {
        html.push_str(&format!(
            "<tr>\n\
             <td>{name}</td>\n\
             <td>{start}</td>\n\
             <td>{end}</td>\n\
             <td>{status}</td>\n\
             <td>\n\
             <a href=\"/dashboard?edit_id={id}\">Edit</a>\n\
             <form method=\"post\" action=\"/dashboard\">\n\
             <input type=\"hidden\" name=\"action\" value=\"delete\">\n\
             <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </td>\n\
             </tr>\n",
            name = escape_html(&course.name),
            start = course.start_datetime.format("%Y-%m-%d %H:%M"),
            end = course.end_datetime.format("%Y-%m-%d %H:%M"),
            status = escape_html(&course.status),
            id = course.id,
        ));
    }

    html
}

fn course_form(edit: &Option<EditCoursePrefill>) -> String {
    let blank = EditCoursePrefill::default();
    let (title, action, prefill) = match edit {
        Some(prefill) => ("Edit course", "update", prefill),
        None => ("Add course", "create", &blank),
    };

    let mut html = format!("<h2>{title}</h2>\n<form method=\"post\" action=\"/dashboard\">\n");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"action\" value=\"{action}\">\n"
    ));
    if edit.is_some() {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"id\" value=\"{}\">\n",
            prefill.id
        ));
    }
    html.push_str(&format!(
        "<label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n",
        escape_html(&prefill.name)
    ));
    html.push_str(&format!(
        "<label>Start date <input type=\"date\" name=\"start_date\" value=\"{}\"></label>\n",
        escape_html(&prefill.start_date)
    ));
    html.push_str(&format!(
        "<label>Start time <input type=\"time\" name=\"start_time\" value=\"{}\"></label>\n",
        escape_html(&prefill.start_time)
    ));
    html.push_str(&format!(
        "<label>End date <input type=\"date\" name=\"end_date\" value=\"{}\"></label>\n",
        escape_html(&prefill.end_date)
    ));
    html.push_str(&format!(
        "<label>End time <input type=\"time\" name=\"end_time\" value=\"{}\"></label>\n",
        escape_html(&prefill.end_time)
    ));

    html.push_str("<label>Status <select name=\"status\">\n");
    for option in [CourseStatus::Active, CourseStatus::Inactive] {
        html.push_str(&format!(
            "<option value=\"{value}\"{sel}>{value}</option>\n",
            value = option.as_str(),
            sel = selected(&prefill.status, option.as_str()),
        ));
    }
    html.push_str("</select></label>\n");

    html.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    html
}

pub fn render(page: &DashboardPage) -> Html<String> {
    let mut body = String::from("<h1>Courses</h1>\n");

    body.push_str(&format!(
        "<p>Signed in as {} | <a href=\"/logout\">Log out</a></p>\n",
        escape_html(&page.user_email)
    ));

    if let Some(flash) = &page.flash {
        body.push_str(&flash_banner(flash));
    }

    body.push_str(&filter_controls(page));

    body.push_str(
        "<table>\n<thead>\n<tr><th>Name</th><th>Start</th><th>End</th><th>Status</th><th></th></tr>\n</thead>\n<tbody>\n",
    );
    if page.courses.is_empty() {
        body.push_str("<tr><td colspan=\"5\">No courses yet.</td></tr>\n");
    } else {
        body.push_str(&course_rows(&page.courses));
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str(&course_form(&page.edit));

    layout::page("Dashboard", body)
}
