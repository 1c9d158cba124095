use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynUserRepository},
    domain::request::{auth::{LoginRequest, RegisterRequest}, user::CreateUserRequest},
    model::user::User,
    utils::AppError,
};

#[derive(Clone)]
pub struct AuthService {
    repository: DynUserRepository,
    hashing: DynHashing,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("repository", &"DynUserRepository")
            .field("hashing", &"DynHashing")
            .finish()
    }
}

impl AuthService {
    pub fn new(repository: DynUserRepository, hashing: DynHashing) -> Self {
        Self {
            repository,
            hashing,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(&self, input: &RegisterRequest) -> Result<User, AppError> {
        // Best-effort duplicate check; the store's UNIQUE constraint has the
        // final word and create_user maps its violation to the same error.
        match self.repository.find_by_email_exists(&input.email).await {
            Ok(true) => {
                info!("Registration rejected, email already taken");
                return Err(AppError::EmailAlreadyExists);
            }
            Ok(false) => (),
            Err(err) => {
                error!("Error checking email during registration: {err}");
                return Err(err);
            }
        }

        let hashed_password = self.hashing.hash_password(&input.password).await?;

        let school = {
            let school = input.school.trim();
            if school.is_empty() {
                None
            } else {
                Some(school.to_string())
            }
        };

        let create_user_request = CreateUserRequest {
            firstname: input.firstname.clone(),
            lastname: input.lastname.clone(),
            school,
            email: input.email.clone(),
            password: hashed_password,
        };

        match self.repository.create_user(&create_user_request).await {
            Ok(user) => {
                info!("User registered successfully");
                Ok(user)
            }
            Err(err) => {
                error!("User registration failed: {err}");
                Err(err)
            }
        }
    }

    async fn login_user(&self, input: &LoginRequest) -> Result<User, AppError> {
        let user = match self.repository.find_by_email(&input.email).await? {
            Some(user) => user,
            None => {
                // Same error as a password mismatch so the response does not
                // reveal whether the account exists.
                info!("Login rejected for unknown email");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !self
            .hashing
            .verify_password(&user.password, &input.password)
            .await?
        {
            info!("Login rejected for wrong password");
            return Err(AppError::InvalidCredentials);
        }

        info!("Login successful for user {}", user.id);

        Ok(user)
    }
}
