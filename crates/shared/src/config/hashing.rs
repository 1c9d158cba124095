use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::{abstract_trait::HashingTrait, utils::AppError};

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Hashing
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        hash(password, DEFAULT_COST).map_err(AppError::HashingError)
    }

    async fn verify_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        verify(password, hashed_password).map_err(AppError::HashingError)
    }
}
