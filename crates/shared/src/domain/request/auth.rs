use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form fields accepted by the registration endpoint. The `recaptcha_token`
/// is carried for the external verification collaborator and never checked
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required."))]
    pub firstname: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required."))]
    pub lastname: String,

    #[serde(default)]
    pub school: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,

    #[serde(default)]
    pub recaptcha_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,

    #[serde(default)]
    pub recaptcha_token: String,
}
