use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::request::auth::{LoginRequest, RegisterRequest},
    model::user::User,
    utils::AppError,
};

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(&self, input: &RegisterRequest) -> Result<User, AppError>;
    async fn login_user(&self, input: &LoginRequest) -> Result<User, AppError>;
}
