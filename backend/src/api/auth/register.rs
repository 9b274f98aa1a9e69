//! Registration endpoint pass-through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::remote::komiz_client::post_json;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

/// Create an account. The caller logs in afterwards; the remote response
/// body is not interesting beyond success.
pub async fn register(username: String, email: String, password: String) -> anyhow::Result<()> {
    let _response: Value =
        post_json("/auth/register", &RegisterRequest { username, email, password }).await?;
    Ok(())
}
