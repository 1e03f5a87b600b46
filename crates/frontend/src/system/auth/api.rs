use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};

use crate::shared::api_utils;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    api_utils::post_json("/auth/login", &request).await
}

/// Register a new user account
pub async fn register(name: String, email: String, password: String) -> Result<(), String> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    api_utils::post_json_no_content("/auth/register", &request).await
}
