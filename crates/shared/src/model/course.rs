use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}
