use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::combine_date_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
}

impl CourseStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(CourseStatus::Active),
            "inactive" => Some(CourseStatus::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Inactive => "inactive",
        }
    }
}

/// Listing order. Unrecognized query values fall back to name-ascending,
/// which is also the explicit `a_z` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSort {
    #[default]
    NameAsc,
    NameDesc,
    CreatedDesc,
    CreatedAsc,
}

impl CourseSort {
    pub fn parse(value: &str) -> Self {
        match value {
            "z_a" => CourseSort::NameDesc,
            "date_desc" => CourseSort::CreatedDesc,
            "date_asc" => CourseSort::CreatedAsc,
            _ => CourseSort::NameAsc,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            CourseSort::NameAsc => "a_z",
            CourseSort::NameDesc => "z_a",
            CourseSort::CreatedDesc => "date_desc",
            CourseSort::CreatedAsc => "date_asc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub status: CourseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub id: i32,
    pub name: String,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub status: CourseStatus,
}

/// Query-string parameters of the course listing. `edit_id` stays raw so a
/// malformed value degrades to "no edit state" instead of a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCoursesQuery {
    #[serde(default)]
    pub status: String,
    pub sort: Option<String>,
    pub edit_id: Option<String>,
}

impl ListCoursesQuery {
    pub fn edit_id(&self) -> Option<i32> {
        self.edit_id
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok())
            .filter(|id| *id > 0)
    }
}

/// Raw mutation form as submitted by the dashboard. One POST endpoint serves
/// create, update and delete, selected by the `action` field; `into_action`
/// turns it into the typed variant or a user-facing error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseActionForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CourseAction {
    Create(CreateCourseRequest),
    Update(UpdateCourseRequest),
    Delete { id: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CourseActionError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid date or time values.")]
    InvalidDateTime,
    #[error("Invalid status value.")]
    InvalidStatus,
    #[error("Invalid course ID for update.")]
    InvalidUpdateId,
    #[error("Invalid course ID for deletion.")]
    InvalidDeleteId,
    #[error("Unknown action.")]
    UnknownAction,
}

impl CourseActionForm {
    pub fn into_action(self) -> Result<CourseAction, CourseActionError> {
        match self.action.as_str() {
            "create" => {
                let (name, start_datetime, end_datetime, status) = self.parse_course_fields()?;
                Ok(CourseAction::Create(CreateCourseRequest {
                    name,
                    start_datetime,
                    end_datetime,
                    status,
                }))
            }
            "update" => {
                // Field validation takes precedence over the id check.
                let (name, start_datetime, end_datetime, status) = self.parse_course_fields()?;
                let id = self
                    .positive_id()
                    .ok_or(CourseActionError::InvalidUpdateId)?;
                Ok(CourseAction::Update(UpdateCourseRequest {
                    id,
                    name,
                    start_datetime,
                    end_datetime,
                    status,
                }))
            }
            "delete" => {
                let id = self
                    .positive_id()
                    .ok_or(CourseActionError::InvalidDeleteId)?;
                Ok(CourseAction::Delete { id })
            }
            _ => Err(CourseActionError::UnknownAction),
        }
    }

    fn positive_id(&self) -> Option<i32> {
        self.id.parse::<i32>().ok().filter(|id| *id > 0)
    }

    fn parse_course_fields(
        &self,
    ) -> Result<(String, NaiveDateTime, NaiveDateTime, CourseStatus), CourseActionError> {
        let name = self.name.trim();

        if name.is_empty()
            || self.start_date.is_empty()
            || self.start_time.is_empty()
            || self.end_date.is_empty()
            || self.end_time.is_empty()
        {
            return Err(CourseActionError::MissingFields);
        }

        let start_datetime = combine_date_time(&self.start_date, &self.start_time)
            .ok_or(CourseActionError::InvalidDateTime)?;
        let end_datetime = combine_date_time(&self.end_date, &self.end_time)
            .ok_or(CourseActionError::InvalidDateTime)?;

        let status = if self.status.is_empty() {
            CourseStatus::default()
        } else {
            CourseStatus::parse(&self.status).ok_or(CourseActionError::InvalidStatus)?
        };

        Ok((name.to_string(), start_datetime, end_datetime, status))
    }
}
