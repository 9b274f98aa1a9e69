//! Boot-time session validation against `/auth/me`.

use common::session::User;

use crate::remote::komiz_client::get_json_with_token;

/// `Ok(Some(user))` for a live token, `Ok(None)` when the remote rejected
/// it, `Err` for transport failures. The caller keeps its stored mirror on
/// `Err` and clears it on `Ok(None)`.
pub async fn validate_session(token: String) -> anyhow::Result<Option<User>> {
    get_json_with_token("/auth/me", &token).await
}
