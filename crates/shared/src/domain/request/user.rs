use serde::{Deserialize, Serialize};

/// Insert payload for the user repository. The password field carries the
/// bcrypt hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub school: Option<String>,
    pub email: String,
    pub password: String,
}
