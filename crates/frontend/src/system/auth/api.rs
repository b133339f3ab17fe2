use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{get_json, post_json};

pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    post_json("/auth/jwt/create/", &request).await
}

pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json("/auth/users/me/").await
}
