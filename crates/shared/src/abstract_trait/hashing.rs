use async_trait::async_trait;
use std::sync::Arc;

use crate::utils::AppError;

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

#[async_trait]
pub trait HashingTrait: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, AppError>;
    async fn verify_password(&self, hashed_password: &str, password: &str)
    -> Result<bool, AppError>;
}
