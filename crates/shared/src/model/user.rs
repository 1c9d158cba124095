use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub school: Option<String>,
    pub email: String,
    pub password: String,
}
