//! Login endpoint pass-through.

use common::session::{AuthSession, User};
use serde::{Deserialize, Serialize};

use crate::remote::komiz_client::{get_json_with_token, post_form};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Exchange credentials for a token, then resolve the user behind it.
pub async fn login(username: String, password: String) -> anyhow::Result<AuthSession> {
    let response: LoginResponse =
        post_form("/auth/login", &[("username", username), ("password", password)]).await?;
    let user: Option<User> = get_json_with_token("/auth/me", &response.access_token).await?;
    let Some(user) = user else {
        anyhow::bail!("login token was not accepted by /auth/me");
    };
    tracing::info!(username = %user.username, "login ok");
    Ok(AuthSession { token: response.access_token, user })
}
