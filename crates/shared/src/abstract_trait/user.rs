use async_trait::async_trait;
use std::sync::Arc;

use crate::{domain::request::user::CreateUserRequest, model::user::User, utils::AppError};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email_exists(&self, email: &str) -> Result<bool, AppError>;
    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError>;
}
